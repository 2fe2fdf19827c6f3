pub mod catalog;
pub mod engine;
pub mod events;
pub mod slot;
pub mod types;
