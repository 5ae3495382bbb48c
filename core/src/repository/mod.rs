pub mod blob;
pub mod document;
pub mod fallback;
pub mod traits;

// Re-export
pub use blob::BlobFoodStore;
pub use document::DocumentFoodStore;
pub use fallback::FallbackFoodStore;
pub use traits::FoodStore;
