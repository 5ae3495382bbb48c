use std::path::PathBuf;

use anyhow::Result;

use crate::model::food::FoodEntry;
use crate::repository::blob::BlobFoodStore;
use crate::repository::document::DocumentFoodStore;
use crate::repository::traits::FoodStore;

/// Pairs the structured document store with the legacy blob. The document
/// store is preferred; the blob serves as the fallback when the document
/// store is unavailable, and its contents are migrated over exactly once.
pub struct FallbackFoodStore {
    primary: Option<DocumentFoodStore>,
    legacy: BlobFoodStore,
}

impl FallbackFoodStore {
    pub fn open(base_dir: Option<PathBuf>) -> Result<Self> {
        // When the document store fails to come up, everything runs against
        // the blob instead.
        let primary = DocumentFoodStore::new(base_dir.clone()).ok();
        let legacy = BlobFoodStore::new(base_dir)?;
        Ok(FallbackFoodStore { primary, legacy })
    }

    /// One-time migration: pull whatever the blob holds into the document
    /// store, then clear the blob.
    fn migrate_legacy(&self, primary: &DocumentFoodStore) -> Result<Vec<FoodEntry>> {
        let legacy_items = self.legacy.load()?;
        if !legacy_items.is_empty() {
            primary.save(&legacy_items)?;
            self.legacy.clear()?;
        }
        Ok(legacy_items)
    }
}

impl FoodStore for FallbackFoodStore {
    fn load(&self) -> Result<Vec<FoodEntry>> {
        let Some(primary) = &self.primary else {
            return self.legacy.load();
        };
        match primary.load() {
            Ok(items) if !items.is_empty() => Ok(items),
            Ok(_) => self.migrate_legacy(primary),
            Err(_) => self.legacy.load(),
        }
    }

    fn save(&self, items: &[FoodEntry]) -> Result<()> {
        if let Some(primary) = &self.primary {
            if primary.save(items).is_ok() {
                return Ok(());
            }
        }
        self.legacy.save(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn entry(name: &str, code: &str) -> FoodEntry {
        FoodEntry::from_code(name.to_string(), code.to_string()).unwrap()
    }

    #[test]
    fn prefers_document_records_when_present() {
        let dir = tempdir().unwrap();
        let base = Some(dir.path().to_path_buf());

        let items = vec![entry("Milk", "03/24")];
        DocumentFoodStore::new(base.clone()).unwrap().save(&items).unwrap();

        let store = FallbackFoodStore::open(base).unwrap();
        assert_eq!(store.load().unwrap(), items);
    }

    #[test]
    fn migrates_blob_contents_into_the_document_store_once() {
        let dir = tempdir().unwrap();
        let base = Some(dir.path().to_path_buf());

        let legacy_items = vec![entry("Milk", "03/24"), entry("Eggs", "2024-04-01")];
        BlobFoodStore::new(base.clone()).unwrap().save(&legacy_items).unwrap();

        let store = FallbackFoodStore::open(base.clone()).unwrap();
        let mut loaded = store.load().unwrap();
        loaded.sort_by_key(|item| item.id);
        let mut expected = legacy_items.clone();
        expected.sort_by_key(|item| item.id);
        assert_eq!(loaded, expected);

        // The blob is gone and the records now live in the document store.
        assert!(!dir.path().join("foods.json").exists());
        let mut documents = DocumentFoodStore::new(base).unwrap().load().unwrap();
        documents.sort_by_key(|item| item.id);
        assert_eq!(documents, expected);
    }

    #[test]
    fn empty_stores_load_as_empty() {
        let dir = tempdir().unwrap();
        let store = FallbackFoodStore::open(Some(dir.path().to_path_buf())).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_writes_document_records() {
        let dir = tempdir().unwrap();
        let base = Some(dir.path().to_path_buf());
        let store = FallbackFoodStore::open(base.clone()).unwrap();

        store.save(&[entry("Butter", "05/24")]).unwrap();

        assert_eq!(fs::read_dir(dir.path().join("foods")).unwrap().count(), 1);
        // The blob stays untouched when the document store accepts the save.
        assert!(!dir.path().join("foods.json").exists());
    }
}
