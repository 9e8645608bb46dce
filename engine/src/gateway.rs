//! # Overlay Gateway
//!
//! The only boundary through which the engine touches real overlay state.
//! Every enable/disable request and every status read goes through an
//! [`OverlayGateway`]; the engine itself keeps no overlay state between calls.
//!
//! ## Implementations
//!
//! - [`InMemoryGateway`] - overlay state held in memory, with toggle recording
//!   and failure injection
//! - the `tinct` binary ships a gateway that drives the platform overlay
//!   command
//!
//! ## Failure policy
//!
//! Gateways report failures as [`GatewayError`]. The engine never retries:
//! failed reads count as "inactive" and failed writes are recorded in the
//! operation's [`ToggleReport`] while sibling toggles proceed.

pub use self::memory::InMemoryGateway;

/// Gateway backed by an in-memory overlay table
pub mod memory;

use crate::catalog::OverlayId;
use crate::errors::GatewayResult;
use crate::report::{Toggle, ToggleReport};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope passed to every gateway call, typically the platform user id.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl UserId {
    /// The primary (system) user.
    pub const SYSTEM: UserId = UserId(0);
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read/toggle access to the platform overlay service.
pub trait OverlayGateway {
    /// Whether `overlay` is enabled for `user`.
    ///
    /// `Ok(None)` means the service answered but could not resolve the overlay.
    fn is_enabled(&self, overlay: &OverlayId, user: UserId) -> GatewayResult<Option<bool>>;

    /// Requests activation or deactivation of `overlay` for `user`.
    fn set_enabled(&self, overlay: &OverlayId, enabled: bool, user: UserId) -> GatewayResult<()>;
}

impl<G: OverlayGateway + ?Sized> OverlayGateway for &G {
    fn is_enabled(&self, overlay: &OverlayId, user: UserId) -> GatewayResult<Option<bool>> {
        (**self).is_enabled(overlay, user)
    }

    fn set_enabled(&self, overlay: &OverlayId, enabled: bool, user: UserId) -> GatewayResult<()> {
        (**self).set_enabled(overlay, enabled, user)
    }
}

impl<G: OverlayGateway + ?Sized> OverlayGateway for Box<G> {
    fn is_enabled(&self, overlay: &OverlayId, user: UserId) -> GatewayResult<Option<bool>> {
        (**self).is_enabled(overlay, user)
    }

    fn set_enabled(&self, overlay: &OverlayId, enabled: bool, user: UserId) -> GatewayResult<()> {
        (**self).set_enabled(overlay, enabled, user)
    }
}

/// Reads an overlay flag, treating unknown overlays and failures as disabled.
pub(crate) fn read_enabled<G: OverlayGateway + ?Sized>(
    gateway: &G,
    overlay: &OverlayId,
    user: UserId,
) -> bool {
    match gateway.is_enabled(overlay, user) {
        Ok(Some(enabled)) => enabled,
        Ok(None) => {
            log::warn!("Overlay {overlay} is unknown for user {user}, treating as disabled");
            false
        }
        Err(e) => {
            log::warn!("Failed to read overlay {overlay} for user {user}: {e}");
            false
        }
    }
}

/// Issues one toggle and records its outcome in `report`.
pub(crate) fn issue_toggle<G: OverlayGateway + ?Sized>(
    gateway: &G,
    overlay: &OverlayId,
    enabled: bool,
    user: UserId,
    report: &mut ToggleReport,
) {
    let action = if enabled { "enable" } else { "disable" };
    match gateway.set_enabled(overlay, enabled, user) {
        Ok(()) => {
            log::debug!("{action} {overlay} for user {user}");
            report.add_success(Toggle {
                overlay: overlay.clone(),
                enabled,
            });
        }
        Err(e) => {
            log::warn!("Can't {action} overlay {overlay} for user {user}: {e}");
            report.add_failure(format!("{action} {overlay}: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GatewayError;

    #[test]
    fn test_read_enabled_fail_safe() {
        let gateway = InMemoryGateway::with_overlays(["a"]);
        gateway.seed(UserId::SYSTEM, "a", true);

        assert!(read_enabled(&gateway, &"a".into(), UserId::SYSTEM));
        assert!(!read_enabled(&gateway, &"missing".into(), UserId::SYSTEM));

        gateway.set_unavailable(true);
        assert!(!read_enabled(&gateway, &"a".into(), UserId::SYSTEM));
    }

    #[test]
    fn test_issue_toggle_records_failure_message() {
        let gateway = InMemoryGateway::with_overlays(["a"]);
        let mut report = ToggleReport::new();

        issue_toggle(&gateway, &"b".into(), true, UserId::SYSTEM, &mut report);

        assert_eq!(report.failed, 1);
        assert!(report.error_details[0].contains("enable b"));
        assert!(
            report.error_details[0].contains(&GatewayError::UnknownOverlay("b".into()).to_string())
        );
    }

    #[test]
    fn test_boxed_gateway_delegates() {
        let gateway: Box<dyn OverlayGateway> = Box::new(InMemoryGateway::with_overlays(["a"]));
        gateway.set_enabled(&"a".into(), true, UserId(10)).unwrap();
        assert_eq!(gateway.is_enabled(&"a".into(), UserId(10)), Ok(Some(true)));
        assert_eq!(gateway.is_enabled(&"a".into(), UserId::SYSTEM), Ok(Some(false)));
    }
}
