pub mod config_entries;
pub mod logs;
