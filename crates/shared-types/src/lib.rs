pub mod config;
pub mod error;
pub mod profile;

pub use config::*;
pub use error::*;
pub use profile::*;
