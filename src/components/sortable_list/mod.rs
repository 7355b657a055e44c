mod component;
mod reorder;

pub use component::{ListItem, SortableList};
pub use reorder::reorder;
