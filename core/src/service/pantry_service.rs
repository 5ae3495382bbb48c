use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Utc};

use crate::model::food::FoodEntry;
use crate::repository::FoodStore;
use crate::service::dto::{FoodRow, PantryStats};

/// Owns the in-memory food list. Every mutation runs update-then-persist;
/// rendering happens from `rows`, which derives status from the caller's
/// "now".
pub struct PantryService<S: FoodStore> {
    store: S,
    items: Vec<FoodEntry>,
}

impl<S: FoodStore> PantryService<S> {
    pub fn load(store: S) -> Result<Self> {
        let items = store.load()?;
        Ok(Self { store, items })
    }

    pub fn items(&self) -> &[FoodEntry] {
        &self.items
    }

    /// Parse the code, append the entry, persist. A failed parse leaves both
    /// the list and the store untouched.
    pub fn add(&mut self, name: &str, code: &str) -> Result<FoodEntry> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Food name is required");
        }
        let entry = FoodEntry::from_code(name.to_string(), code.trim().to_string())?;
        self.items.push(entry.clone());
        self.store.save(&self.items)?;
        Ok(entry)
    }

    /// Remove one entry by id. A unique prefix of the id is enough.
    pub fn remove(&mut self, id_prefix: &str) -> Result<FoodEntry> {
        let id_prefix = id_prefix.trim();
        if id_prefix.is_empty() {
            bail!("An id is required");
        }
        let matches: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.id.to_string().starts_with(id_prefix))
            .map(|(pos, _)| pos)
            .collect();
        match matches.as_slice() {
            [pos] => {
                let removed = self.items.remove(*pos);
                self.store.save(&self.items)?;
                Ok(removed)
            }
            [] => Err(anyhow!("No food matches id '{}'", id_prefix)),
            _ => Err(anyhow!(
                "Ambiguous id '{}' matches {} foods",
                id_prefix,
                matches.len()
            )),
        }
    }

    /// Empty the list. Returns how many entries were removed; clearing an
    /// already-empty list skips the store entirely.
    pub fn clear(&mut self) -> Result<usize> {
        if self.items.is_empty() {
            return Ok(0);
        }
        let removed = self.items.len();
        self.items.clear();
        self.store.save(&self.items)?;
        Ok(removed)
    }

    /// Decorated rows sorted ascending by expiry instant.
    pub fn rows(&self, now: DateTime<Utc>) -> Vec<FoodRow> {
        let mut rows: Vec<FoodRow> = self
            .items
            .iter()
            .map(|item| FoodRow::from_entry(item, now))
            .collect();
        rows.sort_by_key(|row| row.expires_at);
        rows
    }

    pub fn stats(&self, now: DateTime<Utc>) -> PantryStats {
        PantryStats::from_rows(&self.rows(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::day_end;
    use chrono::{Local, NaiveDate, TimeZone};
    use std::cell::RefCell;
    use std::rc::Rc;
    use uuid::Uuid;

    /// In-memory store; clones share the backing list so tests can inspect
    /// what the service persisted.
    #[derive(Default, Clone)]
    struct MemoryStore {
        saved: Rc<RefCell<Vec<FoodEntry>>>,
    }

    impl FoodStore for MemoryStore {
        fn load(&self) -> Result<Vec<FoodEntry>> {
            Ok(self.saved.borrow().clone())
        }

        fn save(&self, items: &[FoodEntry]) -> Result<()> {
            *self.saved.borrow_mut() = items.to_vec();
            Ok(())
        }
    }

    fn seeded_entry(id: &str, name: &str, year: i32, month: u32, day: u32) -> FoodEntry {
        FoodEntry {
            id: Uuid::parse_str(id).unwrap(),
            name: name.to_string(),
            expiry_code: format!("{:04}-{:02}-{:02}", year, month, day),
            expires_at: day_end(NaiveDate::from_ymd_opt(year, month, day).unwrap()),
        }
    }

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn add_parses_the_code_and_persists() {
        let store = MemoryStore::default();
        let mut service = PantryService::load(store.clone()).unwrap();

        let entry = service.add("  Milk  ", "03/24").unwrap();
        assert_eq!(entry.name, "Milk");
        assert_eq!(entry.expiry_code, "03/24");
        assert_eq!(
            entry.expires_at,
            day_end(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
        );
        assert_eq!(store.saved.borrow().len(), 1);
    }

    #[test]
    fn failed_parse_leaves_list_and_store_untouched() {
        let store = MemoryStore::default();
        let mut service = PantryService::load(store.clone()).unwrap();

        assert!(service.add("Milk", "sometime soon").is_err());
        assert!(service.items().is_empty());
        assert!(store.saved.borrow().is_empty());
    }

    #[test]
    fn add_requires_a_name() {
        let store = MemoryStore::default();
        let mut service = PantryService::load(store).unwrap();
        assert!(service.add("   ", "2024-03-05").is_err());
    }

    #[test]
    fn remove_accepts_a_unique_id_prefix() {
        let store = MemoryStore::default();
        store.saved.replace(vec![
            seeded_entry("aaaa0000-0000-4000-8000-000000000001", "Milk", 2024, 3, 5),
            seeded_entry("bbbb0000-0000-4000-8000-000000000002", "Eggs", 2024, 3, 8),
        ]);
        let mut service = PantryService::load(store.clone()).unwrap();

        let removed = service.remove("aaaa").unwrap();
        assert_eq!(removed.name, "Milk");
        assert_eq!(service.items().len(), 1);
        assert_eq!(store.saved.borrow().len(), 1);
    }

    #[test]
    fn remove_rejects_ambiguous_and_unknown_prefixes() {
        let store = MemoryStore::default();
        store.saved.replace(vec![
            seeded_entry("aaaa0000-0000-4000-8000-000000000001", "Milk", 2024, 3, 5),
            seeded_entry("aaab0000-0000-4000-8000-000000000002", "Eggs", 2024, 3, 8),
        ]);
        let mut service = PantryService::load(store.clone()).unwrap();

        assert!(service.remove("aaa").is_err());
        assert!(service.remove("ffff").is_err());
        assert!(service.remove("").is_err());
        assert_eq!(service.items().len(), 2);
        assert_eq!(store.saved.borrow().len(), 2);
    }

    #[test]
    fn clear_empties_the_list_and_reports_the_count() {
        let store = MemoryStore::default();
        store.saved.replace(vec![
            seeded_entry("aaaa0000-0000-4000-8000-000000000001", "Milk", 2024, 3, 5),
            seeded_entry("bbbb0000-0000-4000-8000-000000000002", "Eggs", 2024, 3, 8),
        ]);
        let mut service = PantryService::load(store.clone()).unwrap();

        assert_eq!(service.clear().unwrap(), 2);
        assert!(service.items().is_empty());
        assert!(store.saved.borrow().is_empty());

        // Clearing again is a no-op.
        assert_eq!(service.clear().unwrap(), 0);
    }

    #[test]
    fn rows_sort_ascending_by_expiry() {
        let store = MemoryStore::default();
        store.saved.replace(vec![
            seeded_entry("aaaa0000-0000-4000-8000-000000000001", "Frozen peas", 2024, 6, 1),
            seeded_entry("bbbb0000-0000-4000-8000-000000000002", "Old milk", 2024, 3, 1),
            seeded_entry("cccc0000-0000-4000-8000-000000000003", "Eggs", 2024, 3, 8),
        ]);
        let service = PantryService::load(store).unwrap();

        let rows = service.rows(noon(2024, 3, 5));
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["Old milk", "Eggs", "Frozen peas"]);
    }
}
