pub mod lifecycle;
pub mod seed;
pub mod store;
