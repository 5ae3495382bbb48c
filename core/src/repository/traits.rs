use crate::model::food::FoodEntry;
use anyhow::Result;

/// Storage for the food list. Implementations persist the full list on every
/// save; partial updates do not exist at this layer.
pub trait FoodStore {
    fn load(&self) -> Result<Vec<FoodEntry>>;
    fn save(&self, items: &[FoodEntry]) -> Result<()>;
}
