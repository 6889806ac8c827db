pub mod debounce;
pub mod export;
pub mod service;
