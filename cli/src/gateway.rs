//! Overlay gateways backed by the platform overlay command.

pub use self::command::{CommandGateway, parse_overlay_list};
pub use self::dry_run::DryRunGateway;

/// Gateway that shells out to `cmd overlay`
pub mod command;
/// Gateway wrapper that reads for real and only logs writes
pub mod dry_run;
