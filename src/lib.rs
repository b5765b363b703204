pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod view;

pub use error::{Error, Result};
