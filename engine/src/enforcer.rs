//! Cross-group consistency rules re-asserted after theme changes.

use crate::catalog::Catalog;
use crate::gateway::{OverlayGateway, UserId, issue_toggle, read_enabled};
use crate::monochrome::MonochromeAccent;
use crate::query::ThemeStateQuery;
use crate::report::ToggleReport;

/// Re-checks and repairs the accent pairing and stock dark rules for one user.
///
/// Both rules read current state first and only toggle what is wrong, so
/// running them on already consistent state issues no toggles.
pub(crate) struct ExclusivityEnforcer<'a, G: ?Sized> {
    catalog: &'a Catalog,
    gateway: &'a G,
    user: UserId,
}

impl<'a, G: OverlayGateway + ?Sized> ExclusivityEnforcer<'a, G> {
    pub(crate) fn new(catalog: &'a Catalog, gateway: &'a G, user: UserId) -> Self {
        Self {
            catalog,
            gateway,
            user,
        }
    }

    /// Moves the monochrome accent to the side that matches the theme state.
    ///
    /// Nothing happens when the wanted side is already on, or when neither
    /// side is on.
    pub(crate) fn enforce_accent_pairing(&self) -> ToggleReport {
        let mut report = ToggleReport::new();
        let query = ThemeStateQuery::new(self.catalog, self.gateway, self.user);

        let wanted = MonochromeAccent::for_theme(query.any_family_active());
        let wanted_overlay = self.catalog.monochrome_overlay(wanted);
        if read_enabled(self.gateway, wanted_overlay, self.user) {
            return report;
        }

        let unwanted_overlay = self.catalog.monochrome_overlay(wanted.counterpart());
        if read_enabled(self.gateway, unwanted_overlay, self.user) {
            log::info!("Swapping monochrome accent {unwanted_overlay} for {wanted_overlay}");
            issue_toggle(self.gateway, unwanted_overlay, false, self.user, &mut report);
            issue_toggle(self.gateway, wanted_overlay, true, self.user, &mut report);
        }
        report
    }

    /// Turns the stock dark overlay off if it is on.
    pub(crate) fn enforce_stock_dark_exclusion(&self) -> ToggleReport {
        let mut report = ToggleReport::new();
        let stock_dark = self.catalog.stock_dark();
        if read_enabled(self.gateway, stock_dark, self.user) {
            issue_toggle(self.gateway, stock_dark, false, self.user, &mut report);
        }
        report
    }
}
