pub mod command;
pub mod event;
pub mod summary;
pub mod types;
