pub mod activity;
pub mod dashboard;
pub mod task;
pub mod ticket;
