use chrono::{DateTime, Local, Utc};

use crate::expiry::day_end;
use crate::model::food::FoodEntry;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Items at most this many days out count as due soon.
pub const SOON_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Expired,
    Today,
    Soon,
    Fresh,
}

/// Derived per render from the current moment; never persisted or cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryStatus {
    pub kind: StatusKind,

    /// Whole days between the end of today and the expiry instant.
    /// Negative means overdue.
    pub days_left: i64,

    pub short: &'static str,
    pub text: String,
}

/// Classify an expiry instant against `now`. Pure and total: identical
/// inputs always produce the identical result.
pub fn classify(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> ExpiryStatus {
    let today_end = day_end(now.with_timezone(&Local).date_naive());
    let diff_ms = (expires_at - today_end).num_milliseconds();
    // Ceiling division; both instants sit on day-end boundaries, so this is
    // an exact day count.
    let days_left = (diff_ms + MS_PER_DAY - 1).div_euclid(MS_PER_DAY);

    // Expired compares raw instants while everything below is day-granular:
    // an item expiring at the end of today reads "today" until the clock
    // actually passes 23:59:59.999.
    if expires_at < now {
        let ago = days_left.abs();
        let text = if ago == 0 {
            "Expired today".to_string()
        } else {
            format!("Expired {} day{} ago", ago, plural(ago))
        };
        return ExpiryStatus {
            kind: StatusKind::Expired,
            days_left,
            short: "Expired",
            text,
        };
    }

    if days_left <= 0 {
        return ExpiryStatus {
            kind: StatusKind::Today,
            days_left: 0,
            short: "Today",
            text: "Expires today".to_string(),
        };
    }

    if days_left <= SOON_WINDOW_DAYS {
        return ExpiryStatus {
            kind: StatusKind::Soon,
            days_left,
            short: "Soon",
            text: format!("Expires in {} day{}", days_left, plural(days_left)),
        };
    }

    ExpiryStatus {
        kind: StatusKind::Fresh,
        days_left,
        short: "Fresh",
        text: format!("Expires in {} day{}", days_left, plural(days_left)),
    }
}

impl FoodEntry {
    pub fn status(&self, now: DateTime<Utc>) -> ExpiryStatus {
        classify(self.expires_at, now)
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
