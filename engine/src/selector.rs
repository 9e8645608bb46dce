//! Accent selection.
//!
//! [`plan_accent`] turns a requested accent index plus the current theme
//! state into the single change to make. It performs no I/O; the manager
//! reads the theme state beforehand and applies the plan afterwards.

use crate::catalog::{Catalog, OverlayId};
use crate::errors::{AccentError, AccentResult};
use crate::monochrome::MonochromeAccent;
use crate::query::ActiveFamilies;
use serde::Serialize;

/// What a selection request resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AccentPlan {
    /// Enable exactly this accent overlay.
    Enable { index: usize, overlay: OverlayId },
    /// Disable every accent overlay (indices 1..N-1).
    UnloadAll,
}

impl AccentPlan {
    pub fn target_index(&self) -> Option<usize> {
        match self {
            AccentPlan::Enable { index, .. } => Some(*index),
            AccentPlan::UnloadAll => None,
        }
    }

    fn enable(catalog: &Catalog, index: usize) -> AccentResult<Self> {
        let overlay = catalog.accent_by_id(index)?.clone();
        Ok(AccentPlan::Enable { index, overlay })
    }
}

/// Resolves a requested accent index against the active theme families.
///
/// - `0` enables the paired accent of the highest-priority active family, or
///   unloads every accent when no family is active.
/// - The black index is the monochrome choice: white while any family is
///   active, black otherwise.
/// - The white index itself and anything past the end of the catalog are
///   rejected: no user choice maps to them.
/// - Every other index enables that accent regardless of theme state.
pub fn plan_accent(
    catalog: &Catalog,
    index: usize,
    active: &ActiveFamilies,
) -> AccentResult<AccentPlan> {
    if index >= catalog.accent_count() {
        return Err(AccentError::invalid_index(
            index,
            format!("catalog has {} accents", catalog.accent_count()),
        ));
    }

    if index == 0 {
        return match active.first() {
            Some(family) => AccentPlan::enable(catalog, catalog.paired_accent(family)),
            None => Ok(AccentPlan::UnloadAll),
        };
    }

    if index == catalog.white_accent() {
        return Err(AccentError::invalid_index(
            index,
            format!(
                "the white accent is chosen through the monochrome index {}",
                catalog.black_accent()
            ),
        ));
    }

    if index == catalog.black_accent() {
        let side = MonochromeAccent::for_theme(active.any());
        return AccentPlan::enable(catalog, side.index(catalog));
    }

    AccentPlan::enable(catalog, index)
}
