pub mod expiry;
pub mod model;
pub mod repository;
pub mod scan;
pub mod service;

pub use expiry::{day_end, parse_expiry_code};
pub use model::food::FoodEntry;
pub use model::status::{classify, ExpiryStatus, StatusKind, SOON_WINDOW_DAYS};
pub use repository::{BlobFoodStore, DocumentFoodStore, FallbackFoodStore, FoodStore};
pub use scan::{parse_scan_reply, ScanSuggestion};
pub use service::dto::{FoodRow, PantryStats};
pub use service::pantry_service::PantryService;
