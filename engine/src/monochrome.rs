//! The black/white accent pair.
//!
//! Users pick a single "monochrome" accent; two physical overlays back it.
//! Dark surfaces need the light twin for contrast, so the side that should
//! be active depends only on whether any theme family is active.

use crate::catalog::Catalog;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonochromeAccent {
    Black,
    White,
}

impl MonochromeAccent {
    /// The side of the pair that belongs on screen for the given theme state.
    pub fn for_theme(any_family_active: bool) -> Self {
        if any_family_active {
            MonochromeAccent::White
        } else {
            MonochromeAccent::Black
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MonochromeAccent::Black => "black",
            MonochromeAccent::White => "white",
        }
    }

    pub fn counterpart(self) -> Self {
        match self {
            MonochromeAccent::Black => MonochromeAccent::White,
            MonochromeAccent::White => MonochromeAccent::Black,
        }
    }

    /// Accent index of this side in the catalog.
    pub fn index(self, catalog: &Catalog) -> usize {
        match self {
            MonochromeAccent::Black => catalog.black_accent(),
            MonochromeAccent::White => catalog.white_accent(),
        }
    }
}

impl fmt::Display for MonochromeAccent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
