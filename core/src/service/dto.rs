use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

use crate::model::food::FoodEntry;
use crate::model::status::{classify, ExpiryStatus, StatusKind};

/// Row model handed to rendering: the entry's fields plus everything derived
/// from "now". Rebuilt on every render, never persisted.
#[derive(Debug, Clone)]
pub struct FoodRow {
    pub id: Uuid,
    pub name: String,
    pub expiry_code: String,
    pub expires_at: DateTime<Utc>,
    pub formatted_date: String,
    pub status: ExpiryStatus,
}

impl FoodRow {
    pub fn from_entry(entry: &FoodEntry, now: DateTime<Utc>) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            expiry_code: entry.expiry_code.clone(),
            expires_at: entry.expires_at,
            formatted_date: entry
                .expires_at
                .with_timezone(&Local)
                .format("%b %-d, %Y")
                .to_string(),
            status: classify(entry.expires_at, now),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PantryStats {
    pub total: usize,
    pub expired: usize,
    pub due_soon: usize,
    pub fresh: usize,
}

impl PantryStats {
    pub fn from_rows(rows: &[FoodRow]) -> Self {
        let mut stats = PantryStats {
            total: rows.len(),
            ..Default::default()
        };
        for row in rows {
            match row.status.kind {
                StatusKind::Expired => stats.expired += 1,
                StatusKind::Today | StatusKind::Soon => stats.due_soon += 1,
                StatusKind::Fresh => stats.fresh += 1,
            }
        }
        stats
    }

    /// Everything not yet expired, the way the stat cards group it.
    pub fn safe(&self) -> usize {
        self.due_soon + self.fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::day_end;
    use chrono::{NaiveDate, TimeZone};

    fn row(name: &str, year: i32, month: u32, day: u32, now: DateTime<Utc>) -> FoodRow {
        let entry = FoodEntry {
            id: Uuid::new_v4(),
            name: name.to_string(),
            expiry_code: format!("{:04}-{:02}-{:02}", year, month, day),
            expires_at: day_end(NaiveDate::from_ymd_opt(year, month, day).unwrap()),
        };
        FoodRow::from_entry(&entry, now)
    }

    #[test]
    fn stats_group_today_with_soon() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let rows = vec![
            row("Old milk", 2024, 3, 1, now),
            row("Yogurt", 2024, 3, 5, now),
            row("Eggs", 2024, 3, 8, now),
            row("Frozen peas", 2024, 6, 1, now),
        ];
        let stats = PantryStats::from_rows(&rows);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.due_soon, 2);
        assert_eq!(stats.fresh, 1);
        assert_eq!(stats.safe(), 3);
    }

    #[test]
    fn row_formats_the_expiry_date_for_display() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let row = row("Milk", 2024, 3, 5, now);
        assert_eq!(row.formatted_date, "Mar 5, 2024");
    }
}
