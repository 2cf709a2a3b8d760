/// Database connection and table creation
pub mod database;

/// Demo dataset loading from config.toml
pub mod seed;
