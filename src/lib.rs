pub mod client;
pub mod config;
pub mod error;
pub mod presenter;
pub mod protocol;
pub mod render;
pub mod terminal;

pub use error::{Error, Result};
