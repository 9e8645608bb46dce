use crate::catalog::ThemeFamily;

/// Operations accepted by [`AccentManager::execute_command`](crate::manager::AccentManager::execute_command).
///
/// # Examples
///
/// ```no_run
/// use engine::commands::AccentCommand;
/// use engine::catalog::ThemeFamily;
///
/// let command = AccentCommand::SelectAccent { index: 5 };
///
/// let command = AccentCommand::SetFamilyEnabled {
///     family: ThemeFamily::Black,
///     enabled: true,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccentCommand {
    /// Enable one accent, resolved against the active theme family.
    SelectAccent { index: usize },

    /// Like `SelectAccent`, but first disable every other enabled accent.
    SwitchAccent { index: usize },

    /// Disable every accent overlay.
    UnloadAccents,

    /// Toggle every surface overlay of a theme family, then repair accent
    /// pairing and, for dark, the stock dark overlay.
    SetFamilyEnabled { family: ThemeFamily, enabled: bool },

    /// Disable the platform's stock dark overlay.
    UnloadStockDark,

    /// Re-assert the black/white pairing rule.
    EnforceAccentPairing,

    IsAccentActive { index: usize },

    IsFamilyActive { family: ThemeFamily },

    /// Snapshot of accents, families and stock dark.
    GetStatus,
}
