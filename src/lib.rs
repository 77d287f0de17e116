pub mod app;
pub mod modules;
pub mod types;
