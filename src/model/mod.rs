pub mod habit;
pub mod config;

pub use habit::*;
pub use config::*;
