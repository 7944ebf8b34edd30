pub mod fetch;
pub mod format;
pub mod grid;
pub mod interaction;
pub mod platform;
pub mod position;
pub mod years;
