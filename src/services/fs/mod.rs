pub mod listing;
pub mod mover;

pub use listing::{create_folder, list_items};
pub use mover::move_file;
