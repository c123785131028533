
pub mod cast;
pub mod memory;
