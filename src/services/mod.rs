// Service exports
pub mod catalog;
pub mod favorites;

pub use catalog::{Catalog, CatalogError};
pub use favorites::FavoritesStore;
