use crate::catalog::ThemeFamily;
use crate::errors::AccentError;
use crate::manager::{AccentChange, StatusSnapshot};
use crate::report::ToggleReport;

/// Result of one [`AccentCommand`](crate::commands::AccentCommand).
///
/// # Examples
///
/// ```no_run
/// use engine::responses::AccentResponse;
///
/// match manager.execute_command(command) {
///     AccentResponse::AccentApplied { change } => {
///         println!("{} toggles issued", change.report.successful);
///     }
///     AccentResponse::Error { error } => eprintln!("Operation failed: {error}"),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AccentResponse {
    /// Returned by `SelectAccent` and `SwitchAccent`.
    AccentApplied { change: AccentChange },

    AccentsUnloaded { report: ToggleReport },

    FamilyToggled {
        family: ThemeFamily,
        enabled: bool,
        report: ToggleReport,
    },

    StockDarkUnloaded { report: ToggleReport },

    AccentPairingEnforced { report: ToggleReport },

    AccentActive { index: usize, active: bool },

    FamilyActive { family: ThemeFamily, active: bool },

    Status { snapshot: StatusSnapshot },

    /// The command was rejected before any toggle was issued.
    Error { error: AccentError },
}

impl AccentResponse {
    /// Toggle report carried by the response, if the command issued toggles.
    pub fn report(&self) -> Option<&ToggleReport> {
        match self {
            AccentResponse::AccentApplied { change } => Some(&change.report),
            AccentResponse::AccentsUnloaded { report }
            | AccentResponse::FamilyToggled { report, .. }
            | AccentResponse::StockDarkUnloaded { report }
            | AccentResponse::AccentPairingEnforced { report } => Some(report),
            _ => None,
        }
    }

    /// False for `Error` and for responses whose toggles did not all succeed.
    pub fn is_success(&self) -> bool {
        match self {
            AccentResponse::Error { .. } => false,
            other => other.report().is_none_or(ToggleReport::is_complete_success),
        }
    }
}
