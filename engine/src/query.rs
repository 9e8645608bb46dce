//! Theme state reads.
//!
//! Every answer here is derived from a fresh gateway read of an anchor or
//! accent overlay. Anything the gateway cannot answer counts as inactive:
//! falling back to "no special theme" is safer than acting on a guess.

use crate::catalog::{Catalog, ThemeFamily};
use crate::errors::{AccentError, AccentResult};
use crate::gateway::{OverlayGateway, UserId, read_enabled};
use serde::Serialize;

/// Theme families found active by one query pass, in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveFamilies(Vec<ThemeFamily>);

impl ActiveFamilies {
    pub fn none() -> Self {
        Self::default()
    }

    /// Highest-priority active family.
    pub fn first(&self) -> Option<ThemeFamily> {
        self.0.first().copied()
    }

    pub fn any(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn contains(&self, family: ThemeFamily) -> bool {
        self.0.contains(&family)
    }

    pub fn as_slice(&self) -> &[ThemeFamily] {
        &self.0
    }
}

impl FromIterator<ThemeFamily> for ActiveFamilies {
    fn from_iter<I: IntoIterator<Item = ThemeFamily>>(iter: I) -> Self {
        let mut families: Vec<ThemeFamily> = iter.into_iter().collect();
        families.sort();
        families.dedup();
        Self(families)
    }
}

/// Read-only view of theme state for one user.
pub struct ThemeStateQuery<'a, G: ?Sized> {
    catalog: &'a Catalog,
    gateway: &'a G,
    user: UserId,
}

impl<'a, G: OverlayGateway + ?Sized> ThemeStateQuery<'a, G> {
    pub fn new(catalog: &'a Catalog, gateway: &'a G, user: UserId) -> Self {
        Self {
            catalog,
            gateway,
            user,
        }
    }

    /// Whether `family`'s anchor overlay is enabled.
    pub fn is_family_active(&self, family: ThemeFamily) -> bool {
        read_enabled(self.gateway, self.catalog.family_anchor(family), self.user)
    }

    pub fn active_families(&self) -> ActiveFamilies {
        ThemeFamily::ALL
            .into_iter()
            .filter(|family| self.is_family_active(*family))
            .collect()
    }

    /// First active family in priority order; stops reading at the first hit.
    pub fn first_active_family(&self) -> Option<ThemeFamily> {
        ThemeFamily::ALL
            .into_iter()
            .find(|family| self.is_family_active(*family))
    }

    pub fn any_family_active(&self) -> bool {
        self.first_active_family().is_some()
    }

    /// Whether the accent at `index` is enabled.
    ///
    /// The default slot is never an overlay and always reads `false`.
    pub fn is_accent_active(&self, index: usize) -> AccentResult<bool> {
        let overlay = self
            .catalog
            .accent_by_id(index)
            .map_err(|_| AccentError::invalid_index(index, "no accent at this index"))?;
        if index == 0 {
            return Ok(false);
        }
        Ok(read_enabled(self.gateway, overlay, self.user))
    }

    pub fn is_stock_dark_active(&self) -> bool {
        read_enabled(self.gateway, self.catalog.stock_dark(), self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::small_catalog;
    use crate::gateway::InMemoryGateway;
    use claims::{assert_matches, assert_ok};

    fn setup() -> (Catalog, InMemoryGateway) {
        let catalog = small_catalog();
        let gateway = InMemoryGateway::from_catalog(&catalog);
        (catalog, gateway)
    }

    #[test]
    fn test_family_active_follows_anchor_only() {
        let (catalog, gateway) = setup();
        gateway.seed(UserId::SYSTEM, "black.settings", true);

        let query = ThemeStateQuery::new(&catalog, &gateway, UserId::SYSTEM);
        assert!(!query.is_family_active(ThemeFamily::Black));

        gateway.seed(UserId::SYSTEM, "black.system", true);
        assert!(query.is_family_active(ThemeFamily::Black));
    }

    #[test]
    fn test_first_active_family_uses_priority_order() {
        let (catalog, gateway) = setup();
        gateway.seed(UserId::SYSTEM, "alt.system", true);
        gateway.seed(UserId::SYSTEM, "black.system", true);

        let query = ThemeStateQuery::new(&catalog, &gateway, UserId::SYSTEM);
        assert_eq!(query.first_active_family(), Some(ThemeFamily::Black));
        assert_eq!(
            query.active_families().as_slice(),
            &[ThemeFamily::Black, ThemeFamily::AlternatePalette]
        );
    }

    #[test]
    fn test_unknown_anchor_is_inactive() {
        let catalog = small_catalog();
        let gateway = InMemoryGateway::with_overlays(["acc.red"]);

        let query = ThemeStateQuery::new(&catalog, &gateway, UserId::SYSTEM);
        assert!(!query.any_family_active());
        assert!(!query.active_families().any());
    }

    #[test]
    fn test_unavailable_gateway_is_inactive() {
        let (catalog, gateway) = setup();
        gateway.seed(UserId::SYSTEM, "dark.system", true);
        gateway.set_unavailable(true);

        let query = ThemeStateQuery::new(&catalog, &gateway, UserId::SYSTEM);
        assert!(!query.is_family_active(ThemeFamily::Dark));
        assert!(!query.is_stock_dark_active());
    }

    #[test]
    fn test_state_is_per_user() {
        let (catalog, gateway) = setup();
        gateway.seed(UserId(10), "night.system", true);

        assert!(ThemeStateQuery::new(&catalog, &gateway, UserId(10)).any_family_active());
        assert!(!ThemeStateQuery::new(&catalog, &gateway, UserId::SYSTEM).any_family_active());
    }

    #[test]
    fn test_is_accent_active() {
        let (catalog, gateway) = setup();
        gateway.seed(UserId::SYSTEM, "acc.pink", true);

        let query = ThemeStateQuery::new(&catalog, &gateway, UserId::SYSTEM);
        assert!(assert_ok!(query.is_accent_active(2)));
        assert!(!assert_ok!(query.is_accent_active(1)));
        assert!(!assert_ok!(query.is_accent_active(0)));
        assert_matches!(
            query.is_accent_active(99),
            Err(AccentError::InvalidIndex { index: 99, .. })
        );
    }

    #[test]
    fn test_active_families_from_iter_sorts_and_dedups() {
        let active: ActiveFamilies = [
            ThemeFamily::AlternatePalette,
            ThemeFamily::Dark,
            ThemeFamily::AlternatePalette,
        ]
        .into_iter()
        .collect();

        assert_eq!(active.first(), Some(ThemeFamily::Dark));
        assert_eq!(active.as_slice().len(), 2);
        assert!(active.contains(ThemeFamily::AlternatePalette));
        assert!(!ActiveFamilies::none().any());
    }
}
