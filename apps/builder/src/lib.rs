pub mod config;
pub mod editors;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
pub mod wizard;
