mod catalog;
mod draw;
mod item_count;
mod selection_mode;
mod selection_record;

pub use catalog::{Catalog, CatalogEntry};
pub use draw::Draw;
pub use item_count::ItemCount;
pub use selection_mode::SelectionMode;
pub use selection_record::SelectionRecord;
