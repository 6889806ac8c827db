pub mod fixtures;
pub mod source;
