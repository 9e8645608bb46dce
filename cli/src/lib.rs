//! # tinct
//!
//! Command-line front end for the accent engine: configuration, logging,
//! catalog loading and the overlay command gateway.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod output;

pub use error::{AppError, AppResult};
