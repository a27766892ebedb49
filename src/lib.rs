pub mod catalog;
pub mod config;
pub mod favorites;
pub mod ui;
pub mod worker;
