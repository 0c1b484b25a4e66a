pub mod feed;
pub mod settings;
pub mod tasks;
pub mod tickets;
