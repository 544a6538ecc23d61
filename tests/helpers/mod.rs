pub mod entry_assertions;
pub mod fixtures;
