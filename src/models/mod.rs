pub mod item;
pub mod report;
