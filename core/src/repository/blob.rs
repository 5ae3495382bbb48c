use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::food::FoodEntry;
use crate::repository::traits::FoodStore;

const BLOB_FILE_NAME: &str = "foods.json";

/// Legacy single-file store: the whole list serialized as one JSON array.
pub struct BlobFoodStore {
    file_path: PathBuf,
}

impl BlobFoodStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".larder")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(BLOB_FILE_NAME);
        Ok(BlobFoodStore { file_path: path })
    }

    /// Remove the blob entirely. Called once its contents have been migrated
    /// into the structured store.
    pub fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)?;
        }
        Ok(())
    }
}

impl FoodStore for BlobFoodStore {
    fn load(&self) -> Result<Vec<FoodEntry>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        // A blob that fails to decode reads as empty, the same treatment the
        // structured store gives undecodable records.
        Ok(serde_json::from_reader(reader).unwrap_or_default())
    }

    fn save(&self, items: &[FoodEntry]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, items)?;
        writer.flush()?;
        Ok(())
    }
}
