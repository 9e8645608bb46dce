//! Best-effort toggle bookkeeping.

use crate::catalog::OverlayId;
use serde::Serialize;

/// One enable/disable request that the gateway accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub overlay: OverlayId,
    pub enabled: bool,
}

impl Toggle {
    pub fn enable(overlay: OverlayId) -> Self {
        Self {
            overlay,
            enabled: true,
        }
    }

    pub fn disable(overlay: OverlayId) -> Self {
        Self {
            overlay,
            enabled: false,
        }
    }
}

/// Outcome of every toggle issued by one operation.
///
/// Operations are best-effort: a failed toggle is counted here and the
/// remaining toggles of the same batch still run.
///
/// # Examples
///
/// ```no_run
/// use engine::report::{Toggle, ToggleReport};
///
/// let mut report = ToggleReport::default();
/// report.add_success(Toggle::enable("com.accents.red".into()));
/// report.add_failure("Overlay service unavailable".to_string());
///
/// if !report.is_complete_success() {
///     println!("{} of {} toggles failed", report.failed, report.total_requested);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToggleReport {
    /// Number of toggles attempted
    pub total_requested: usize,
    /// Number of toggles the gateway accepted
    pub successful: usize,
    /// Number of toggles the gateway rejected
    pub failed: usize,
    /// Error message of each rejected toggle
    pub error_details: Vec<String>,
    /// Accepted toggles, in issue order
    pub applied: Vec<Toggle>,
}

impl ToggleReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_success(&mut self, toggle: Toggle) {
        self.total_requested += 1;
        self.successful += 1;
        self.applied.push(toggle);
    }

    pub fn add_failure(&mut self, error: String) {
        self.total_requested += 1;
        self.failed += 1;
        self.error_details.push(error);
    }

    /// Folds another report into this one, keeping issue order.
    pub fn merge(&mut self, other: ToggleReport) {
        self.total_requested += other.total_requested;
        self.successful += other.successful;
        self.failed += other.failed;
        self.error_details.extend(other.error_details);
        self.applied.extend(other.applied);
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed == 0 && self.successful == self.total_requested
    }

    /// True when the operation found nothing to change.
    pub fn is_noop(&self) -> bool {
        self.total_requested == 0
    }

    pub fn enabled_overlays(&self) -> impl Iterator<Item = &OverlayId> {
        self.applied.iter().filter(|t| t.enabled).map(|t| &t.overlay)
    }

    pub fn disabled_overlays(&self) -> impl Iterator<Item = &OverlayId> {
        self.applied.iter().filter(|t| !t.enabled).map(|t| &t.overlay)
    }
}
