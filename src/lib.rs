pub mod cli;
pub mod commands;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod table;
pub mod utils;

pub use error::{AppError, Result};
