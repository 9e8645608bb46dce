//! # tinct engine
//!
//! Decides which accent and theme family overlays should be enabled, and
//! keeps them consistent when either side changes. All overlay state lives
//! behind an [`OverlayGateway`](gateway::OverlayGateway); the engine only
//! reads it, decides, and issues toggles.
//!
//! ## Modules
//!
//! - [`catalog`] - Overlay tables: accents, theme families, stock dark
//! - [`query`] - Which theme families and accents are currently active
//! - [`selector`] - Resolves a requested accent index into a plan
//! - [`monochrome`] - The black/white accent pair
//! - [`gateway`] - Overlay service boundary and the in-memory implementation
//! - [`report`] - Per-toggle success and failure bookkeeping
//! - [`manager`] - Accent manager and its command/response surface
//! - [`errors`] - Error types

pub mod catalog;
pub mod commands;
mod enforcer;
pub mod errors;
pub mod gateway;
pub mod manager;
pub mod monochrome;
pub mod query;
pub mod report;
pub mod responses;
pub mod selector;

pub use catalog::{Catalog, OverlayId, ThemeFamily};
pub use commands::AccentCommand;
pub use errors::{AccentError, CatalogError, GatewayError};
pub use gateway::{InMemoryGateway, OverlayGateway, UserId};
pub use manager::AccentManager;
pub use report::ToggleReport;
pub use responses::AccentResponse;
