//! Static overlay tables: accents, theme families and the stock dark overlay.
//!
//! A [`Catalog`] is built once at startup (usually from a TOML file) and then
//! shared read-only. Construction validates the structural rules the selection
//! and enforcement logic relies on, so lookups on a built catalog never fail
//! except for caller-supplied accent indices.

use crate::errors::{CatalogError, CatalogResult, CatalogValidationError};
use crate::monochrome::MonochromeAccent;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Smallest usable accent list: the default slot plus the black/white pair.
pub const MIN_ACCENTS: usize = 3;

/// Opaque identifier of one toggleable overlay.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayId(String);

impl OverlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OverlayId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OverlayId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Named, mutually exclusive bundle of surface overlays.
///
/// Declaration order is the priority order used when several families
/// report active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeFamily {
    Dark,
    Black,
    NightVariant,
    AlternatePalette,
}

impl ThemeFamily {
    /// Every family, in priority order.
    pub const ALL: [ThemeFamily; 4] = [
        ThemeFamily::Dark,
        ThemeFamily::Black,
        ThemeFamily::NightVariant,
        ThemeFamily::AlternatePalette,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThemeFamily::Dark => "dark",
            ThemeFamily::Black => "black",
            ThemeFamily::NightVariant => "night-variant",
            ThemeFamily::AlternatePalette => "alternate-palette",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ThemeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeFamily {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "dark" => Ok(ThemeFamily::Dark),
            "black" => Ok(ThemeFamily::Black),
            "night-variant" | "night" => Ok(ThemeFamily::NightVariant),
            "alternate-palette" | "alternate" => Ok(ThemeFamily::AlternatePalette),
            _ => Err(CatalogError::UnknownFamily(s.to_string())),
        }
    }
}

/// Surfaces and paired accent of one theme family.
///
/// The first overlay is the family's anchor: its enabled flag decides whether
/// the whole family counts as active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySpec {
    overlays: Vec<OverlayId>,
    paired_accent: usize,
}

impl FamilySpec {
    pub fn new(overlays: Vec<OverlayId>, paired_accent: usize) -> Self {
        Self {
            overlays,
            paired_accent,
        }
    }

    /// Anchor overlay, `None` for an empty list.
    pub fn anchor(&self) -> Option<&OverlayId> {
        self.overlays.first()
    }

    pub fn overlays(&self) -> &[OverlayId] {
        &self.overlays
    }

    pub fn paired_accent(&self) -> usize {
        self.paired_accent
    }
}

/// On-disk shape of a catalog, before validation.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    accents: Vec<OverlayId>,
    black_accent: usize,
    white_accent: usize,
    stock_dark: OverlayId,
    #[serde(default)]
    families: BTreeMap<String, FamilySpec>,
}

/// Immutable overlay registry shared by every accent operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    accents: Vec<OverlayId>,
    black_accent: usize,
    white_accent: usize,
    stock_dark: OverlayId,
    families: [FamilySpec; 4],
}

impl Catalog {
    /// Validates the tables and builds a catalog.
    ///
    /// Every rule violation is collected, so one error lists all problems.
    pub fn new(
        accents: Vec<OverlayId>,
        black_accent: usize,
        white_accent: usize,
        stock_dark: OverlayId,
        mut families: BTreeMap<ThemeFamily, FamilySpec>,
    ) -> CatalogResult<Self> {
        let mut errors = Vec::new();
        let len = accents.len();

        if len < MIN_ACCENTS {
            errors.push(CatalogValidationError::TooFewAccents {
                count: len,
                minimum: MIN_ACCENTS,
            });
        }

        for (which, index) in [("black", black_accent), ("white", white_accent)] {
            if index == 0 || index >= len {
                errors.push(CatalogValidationError::MonochromeIndex { which, index, len });
            }
        }
        if black_accent == white_accent {
            errors.push(CatalogValidationError::MonochromeCollision {
                index: black_accent,
            });
        }

        let mut specs = Vec::with_capacity(ThemeFamily::ALL.len());
        for family in ThemeFamily::ALL {
            let Some(spec) = families.remove(&family) else {
                errors.push(CatalogValidationError::MissingFamily(family));
                continue;
            };

            if spec.overlays.is_empty() {
                errors.push(CatalogValidationError::EmptyFamily(family));
            }

            let mut seen = HashSet::new();
            for overlay in &spec.overlays {
                if !seen.insert(overlay) {
                    errors.push(CatalogValidationError::DuplicateOverlay {
                        family,
                        overlay: overlay.clone(),
                    });
                }
            }

            if spec.paired_accent == 0 {
                errors.push(CatalogValidationError::PairedAccent {
                    family,
                    index: 0,
                    reason: "the default slot is never enabled".to_string(),
                });
            } else if spec.paired_accent >= len {
                errors.push(CatalogValidationError::PairedAccent {
                    family,
                    index: spec.paired_accent,
                    reason: format!("catalog has {len} accents"),
                });
            } else if spec.paired_accent == black_accent {
                errors.push(CatalogValidationError::PairedAccent {
                    family,
                    index: spec.paired_accent,
                    reason: "the monochrome accent resolves through the pair".to_string(),
                });
            }

            if family == ThemeFamily::Dark && spec.overlays.contains(&stock_dark) {
                errors.push(CatalogValidationError::StockDarkInDarkFamily(
                    stock_dark.clone(),
                ));
            }

            specs.push(spec);
        }

        if !errors.is_empty() {
            return Err(CatalogError::Invalid(errors));
        }

        let families: [FamilySpec; 4] = specs.try_into().map_err(|_| {
            CatalogError::Invalid(vec![CatalogValidationError::MissingFamily(
                ThemeFamily::Dark,
            )])
        })?;

        Ok(Self {
            accents,
            black_accent,
            white_accent,
            stock_dark,
            families,
        })
    }

    /// Parses and validates a TOML catalog.
    pub fn from_toml_str(source: &str) -> CatalogResult<Self> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let families = file
            .families
            .into_iter()
            .map(|(name, spec)| Ok((name.parse::<ThemeFamily>()?, spec)))
            .collect::<CatalogResult<BTreeMap<_, _>>>()?;

        Self::new(
            file.accents,
            file.black_accent,
            file.white_accent,
            file.stock_dark,
            families,
        )
    }

    /// Reads, parses and validates a TOML catalog file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let catalog = Self::from_toml_str(&source)?;
        log::info!(
            "Loaded overlay catalog from {} ({} accents)",
            path.display(),
            catalog.accent_count()
        );
        Ok(catalog)
    }

    pub fn accent_by_id(&self, index: usize) -> CatalogResult<&OverlayId> {
        self.accents
            .get(index)
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.accents.len(),
            })
    }

    pub fn family(&self, family: ThemeFamily) -> &FamilySpec {
        &self.families[family.slot()]
    }

    pub fn family_anchor(&self, family: ThemeFamily) -> &OverlayId {
        // Empty families are rejected in `new`.
        &self.family(family).overlays[0]
    }

    pub fn family_members(&self, family: ThemeFamily) -> &[OverlayId] {
        self.family(family).overlays()
    }

    pub fn paired_accent(&self, family: ThemeFamily) -> usize {
        self.family(family).paired_accent()
    }

    pub fn accents(&self) -> &[OverlayId] {
        &self.accents
    }

    pub fn accent_count(&self) -> usize {
        self.accents.len()
    }

    pub fn black_accent(&self) -> usize {
        self.black_accent
    }

    pub fn white_accent(&self) -> usize {
        self.white_accent
    }

    /// Overlay backing one side of the black/white pair.
    pub fn monochrome_overlay(&self, accent: MonochromeAccent) -> &OverlayId {
        &self.accents[accent.index(self)]
    }

    pub fn stock_dark(&self) -> &OverlayId {
        &self.stock_dark
    }

    /// Every toggleable accent index, i.e. everything except the default slot.
    pub fn toggleable_accents(&self) -> impl Iterator<Item = (usize, &OverlayId)> {
        self.accents.iter().enumerate().skip(1)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok};

    fn families_with(dark_overlays: Vec<&str>) -> BTreeMap<ThemeFamily, FamilySpec> {
        let mut families = BTreeMap::new();
        families.insert(
            ThemeFamily::Dark,
            FamilySpec::new(dark_overlays.into_iter().map(OverlayId::from).collect(), 1),
        );
        for family in [
            ThemeFamily::Black,
            ThemeFamily::NightVariant,
            ThemeFamily::AlternatePalette,
        ] {
            families.insert(
                family,
                FamilySpec::new(vec![OverlayId::new(format!("{family}.system"))], 1),
            );
        }
        families
    }

    fn accents(n: usize) -> Vec<OverlayId> {
        (0..n).map(|i| OverlayId::new(format!("acc.{i}"))).collect()
    }

    #[test]
    fn test_lookups_on_small_catalog() {
        let catalog = small_catalog();

        assert_eq!(catalog.accent_count(), 7);
        assert_eq!(catalog.accent_by_id(1).unwrap().as_str(), "acc.red");
        assert_eq!(catalog.family_anchor(ThemeFamily::Dark).as_str(), "dark.system");
        assert_eq!(catalog.family_members(ThemeFamily::NightVariant).len(), 3);
        assert_eq!(catalog.paired_accent(ThemeFamily::Black), 3);
        assert_eq!(catalog.stock_dark().as_str(), "stock.dark");
        assert_eq!(
            catalog.monochrome_overlay(MonochromeAccent::White).as_str(),
            "acc.white"
        );
    }

    #[test]
    fn test_accent_by_id_out_of_range() {
        let catalog = small_catalog();
        let err = assert_err!(catalog.accent_by_id(7));
        assert_eq!(err, CatalogError::IndexOutOfRange { index: 7, len: 7 });
    }

    #[test]
    fn test_toggleable_accents_skip_default_slot() {
        let catalog = small_catalog();
        let indices: Vec<usize> = catalog.toggleable_accents().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_family_from_str_accepts_aliases() {
        assert_eq!(assert_ok!("night".parse::<ThemeFamily>()), ThemeFamily::NightVariant);
        assert_eq!(
            assert_ok!("Alternate_Palette".parse::<ThemeFamily>()),
            ThemeFamily::AlternatePalette
        );
        assert_matches!(
            "sepia".parse::<ThemeFamily>(),
            Err(CatalogError::UnknownFamily(name)) if name == "sepia"
        );
    }

    #[test]
    fn test_family_priority_follows_declaration_order() {
        let mut sorted = ThemeFamily::ALL;
        sorted.sort();
        assert_eq!(sorted, ThemeFamily::ALL);
        assert_eq!(ThemeFamily::ALL[0], ThemeFamily::Dark);
    }

    #[test]
    fn test_rejects_monochrome_on_default_slot() {
        let result = Catalog::new(
            accents(4),
            0,
            3,
            OverlayId::new("stock"),
            families_with(vec!["dark.system"]),
        );
        assert_matches!(
            result,
            Err(CatalogError::Invalid(errors))
                if errors.contains(&CatalogValidationError::MonochromeIndex { which: "black", index: 0, len: 4 })
        );
    }

    #[test]
    fn test_collects_every_problem() {
        let mut families = families_with(vec![]);
        families.remove(&ThemeFamily::Black);

        let err = assert_err!(Catalog::new(
            accents(2),
            1,
            1,
            OverlayId::new("stock"),
            families,
        ));
        let CatalogError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert!(errors.contains(&CatalogValidationError::TooFewAccents {
            count: 2,
            minimum: MIN_ACCENTS
        }));
        assert!(errors.contains(&CatalogValidationError::MonochromeCollision { index: 1 }));
        assert!(errors.contains(&CatalogValidationError::MissingFamily(ThemeFamily::Black)));
        assert!(errors.contains(&CatalogValidationError::EmptyFamily(ThemeFamily::Dark)));
    }

    #[test]
    fn test_rejects_stock_dark_inside_dark_family() {
        let err = assert_err!(Catalog::new(
            accents(4),
            2,
            3,
            OverlayId::new("stock"),
            families_with(vec!["dark.system", "stock"]),
        ));
        assert_matches!(
            err,
            CatalogError::Invalid(errors)
                if errors == vec![CatalogValidationError::StockDarkInDarkFamily(OverlayId::new("stock"))]
        );
    }

    #[test]
    fn test_rejects_duplicate_family_overlay() {
        let err = assert_err!(Catalog::new(
            accents(4),
            2,
            3,
            OverlayId::new("stock"),
            families_with(vec!["dark.system", "dark.system"]),
        ));
        assert_matches!(
            err,
            CatalogError::Invalid(errors)
                if matches!(errors.as_slice(), [CatalogValidationError::DuplicateOverlay { family: ThemeFamily::Dark, .. }])
        );
    }

    #[test]
    fn test_rejects_paired_default_accent() {
        let mut families = families_with(vec!["dark.system"]);
        families.insert(
            ThemeFamily::Black,
            FamilySpec::new(vec![OverlayId::new("black.system")], 0),
        );
        let err = assert_err!(Catalog::new(
            accents(4),
            2,
            3,
            OverlayId::new("stock"),
            families,
        ));
        assert_matches!(
            err,
            CatalogError::Invalid(errors)
                if matches!(errors.as_slice(), [CatalogValidationError::PairedAccent { family: ThemeFamily::Black, index: 0, .. }])
        );
    }

    #[test]
    fn test_rejects_paired_black_accent() {
        let mut families = families_with(vec!["dark.system"]);
        families.insert(
            ThemeFamily::Dark,
            FamilySpec::new(vec![OverlayId::new("dark.system")], 2),
        );
        let err = assert_err!(Catalog::new(
            accents(4),
            2,
            3,
            OverlayId::new("stock"),
            families,
        ));
        assert_matches!(
            err,
            CatalogError::Invalid(errors)
                if matches!(errors.as_slice(), [CatalogValidationError::PairedAccent { family: ThemeFamily::Dark, index: 2, .. }])
        );
    }

    #[test]
    fn test_paired_white_accent_is_allowed() {
        let mut families = families_with(vec!["dark.system"]);
        families.insert(
            ThemeFamily::Dark,
            FamilySpec::new(vec![OverlayId::new("dark.system")], 3),
        );
        assert_ok!(Catalog::new(
            accents(4),
            2,
            3,
            OverlayId::new("stock"),
            families,
        ));
    }

    #[test]
    fn test_family_spec_anchor_on_empty_list() {
        assert_eq!(FamilySpec::new(Vec::new(), 1).anchor(), None);
        assert_eq!(
            FamilySpec::new(vec![OverlayId::new("a"), OverlayId::new("b")], 1).anchor(),
            Some(&OverlayId::new("a"))
        );
    }

    #[test]
    fn test_unknown_family_table_is_rejected() {
        let source = SMALL_CATALOG.replace("[families.alternate-palette]", "[families.sepia]");
        assert_matches!(
            Catalog::from_toml_str(&source),
            Err(CatalogError::UnknownFamily(name)) if name == "sepia"
        );
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert_matches!(
            Catalog::from_toml_str("accents = 3"),
            Err(CatalogError::Parse(_))
        );
    }

    #[test]
    fn test_from_file_reads_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, SMALL_CATALOG).unwrap();

        let catalog = assert_ok!(Catalog::from_file(&path));
        assert_eq!(catalog, small_catalog());
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert_matches!(Catalog::from_file(&path), Err(CatalogError::Io { .. }));
    }
}
