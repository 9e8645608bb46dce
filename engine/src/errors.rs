use crate::catalog::{OverlayId, ThemeFamily};
use thiserror::Error;

/// Failures reported by an [`OverlayGateway`](crate::gateway::OverlayGateway).
///
/// Reads that fail with either variant are treated as "inactive" by the
/// query layer. Writes that fail are recorded per toggle in a
/// [`ToggleReport`](crate::report::ToggleReport) and never abort the batch
/// they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The overlay service could not be reached or the call itself failed.
    #[error("Overlay service unavailable: {0}")]
    Unavailable(String),

    /// The overlay service does not know the requested overlay id.
    #[error("Unknown overlay: {0}")]
    UnknownOverlay(OverlayId),
}

/// Errors raised while building or querying the overlay catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// An accent index outside of the catalog was looked up.
    #[error("Accent index {index} is out of range (catalog has {len} accents)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A theme family name did not match any known family.
    #[error("Unknown theme family: '{0}'")]
    UnknownFamily(String),

    /// The catalog source could not be parsed.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// The catalog file could not be read.
    #[error("Failed to read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    /// The catalog parsed but breaks one or more structural rules.
    #[error("Invalid catalog: {}", format_validation_errors(.0))]
    Invalid(Vec<CatalogValidationError>),
}

fn format_validation_errors(errors: &[CatalogValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Structural problems found by [`Catalog::new`](crate::catalog::Catalog::new).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogValidationError {
    #[error("Catalog needs at least {minimum} accents, found {count}")]
    TooFewAccents { count: usize, minimum: usize },

    #[error("Invalid {which} accent index {index} (valid: 1..{len})")]
    MonochromeIndex {
        which: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Black and white accents share index {index}")]
    MonochromeCollision { index: usize },

    #[error("Theme family '{0}' is missing")]
    MissingFamily(ThemeFamily),

    #[error("Theme family '{0}' has no overlays")]
    EmptyFamily(ThemeFamily),

    #[error("Theme family '{family}' pairs with invalid accent {index}: {reason}")]
    PairedAccent {
        family: ThemeFamily,
        index: usize,
        reason: String,
    },

    #[error("Theme family '{family}' lists overlay '{overlay}' more than once")]
    DuplicateOverlay {
        family: ThemeFamily,
        overlay: OverlayId,
    },

    #[error("Stock dark overlay '{0}' cannot be a member of the dark family")]
    StockDarkInDarkFamily(OverlayId),
}

impl CatalogValidationError {
    pub fn user_message(&self) -> String {
        match self {
            CatalogValidationError::TooFewAccents { count, minimum } => format!(
                "Accent list too short!\n\n\
                Found: {count} entries\n\
                Required: at least {minimum} (default slot, black and white)\n\n\
                Please add the missing accents to the catalog."
            ),
            CatalogValidationError::MonochromeIndex { which, index, len } => format!(
                "The {which} accent index {index} does not point at an accent.\n\n\
                Valid range: 1 - {}\n\n\
                Please update {which}_accent in the catalog.",
                len.saturating_sub(1)
            ),
            CatalogValidationError::MissingFamily(family) => format!(
                "Theme family '{family}' is not defined.\n\n\
                Please add a [families.{family}] table to the catalog."
            ),
            other => other.to_string(),
        }
    }
}

/// Errors surfaced to callers of accent operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccentError {
    /// The caller passed an accent index with no corresponding user choice.
    #[error("Invalid accent index {index}: {reason}")]
    InvalidIndex { index: usize, reason: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl AccentError {
    pub(crate) fn invalid_index(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidIndex {
            index,
            reason: reason.into(),
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
pub type CatalogResult<T> = Result<T, CatalogError>;
pub type AccentResult<T> = Result<T, AccentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_display() {
        let err = AccentError::invalid_index(26, "white is resolved automatically");
        let msg = err.to_string();
        assert!(msg.contains("26"));
        assert!(msg.contains("white"));
    }

    #[test]
    fn test_invalid_catalog_joins_all_problems() {
        let err = CatalogError::Invalid(vec![
            CatalogValidationError::MissingFamily(ThemeFamily::Dark),
            CatalogValidationError::MonochromeCollision { index: 3 },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("'dark' is missing"));
        assert!(msg.contains("share index 3"));
    }

    #[test]
    fn test_user_message_mentions_table_name() {
        let err = CatalogValidationError::MissingFamily(ThemeFamily::NightVariant);
        assert!(err.user_message().contains("[families.night-variant]"));
    }
}
