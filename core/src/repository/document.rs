use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::food::FoodEntry;
use crate::repository::traits::FoodStore;

const DOCUMENT_DIR_NAME: &str = "foods";

/// Structured per-record store: one JSON document per entry, keyed by id.
#[derive(Clone)]
pub struct DocumentFoodStore {
    base_dir: PathBuf,
}

impl DocumentFoodStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".larder")
            }
        };
        path.push(DOCUMENT_DIR_NAME);
        fs::create_dir_all(&path)?;
        Ok(DocumentFoodStore { base_dir: path })
    }

    fn record_path(&self, entry: &FoodEntry) -> PathBuf {
        self.base_dir.join(format!("{}.json", entry.id))
    }
}

impl FoodStore for DocumentFoodStore {
    fn load(&self) -> Result<Vec<FoodEntry>> {
        let mut items = Vec::new();
        for dir_entry in fs::read_dir(&self.base_dir)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            // Records that no longer decode are skipped rather than
            // poisoning the whole list.
            if let Ok(entry) = serde_json::from_str::<FoodEntry>(&content) {
                items.push(entry);
            }
        }
        Ok(items)
    }

    fn save(&self, items: &[FoodEntry]) -> Result<()> {
        // Full replacement: drop every existing record, then write the list.
        for dir_entry in fs::read_dir(&self.base_dir)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                fs::remove_file(path)?;
            }
        }
        for entry in items {
            let content = serde_json::to_string_pretty(entry)?;
            fs::write(self.record_path(entry), content)?;
        }
        Ok(())
    }
}
