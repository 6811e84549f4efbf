pub mod item;
pub mod registry;

pub use item::{ItemCategory, ItemRecord};
pub use registry::Catalog;
