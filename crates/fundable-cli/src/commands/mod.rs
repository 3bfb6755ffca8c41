pub mod funding;
pub mod import;
pub mod list;
