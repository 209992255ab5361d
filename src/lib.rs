pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod registry;
pub mod service;
pub mod web;

pub use error::{Error, Result};
