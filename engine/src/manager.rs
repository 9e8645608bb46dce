//! # Accent Manager
//!
//! Entry point for every accent and theme family operation. The manager owns
//! a shared [`Catalog`], one [`OverlayGateway`] and the user scope all of its
//! calls run under. It keeps no overlay state: each operation re-reads what
//! it needs through the gateway, decides, then issues toggles.
//!
//! Operations never abort halfway because of a failed toggle. The returned
//! [`ToggleReport`] says which toggles went through and which did not.

use crate::catalog::{Catalog, OverlayId, ThemeFamily};
use crate::commands::AccentCommand;
use crate::enforcer::ExclusivityEnforcer;
use crate::errors::AccentResult;
use crate::gateway::{OverlayGateway, UserId, issue_toggle, read_enabled};
use crate::monochrome::MonochromeAccent;
use crate::query::{ActiveFamilies, ThemeStateQuery};
use crate::report::ToggleReport;
use crate::responses::AccentResponse;
use crate::selector::{AccentPlan, plan_accent};
use serde::Serialize;
use std::sync::Arc;

/// What an accent selection resolved to and what it issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccentChange {
    pub requested: usize,
    pub plan: AccentPlan,
    pub report: ToggleReport,
}

/// One enabled accent overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccentState {
    pub index: usize,
    pub overlay: OverlayId,
}

/// Point-in-time view of the overlays the manager governs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub user: UserId,
    pub active_families: ActiveFamilies,
    pub enabled_accents: Vec<AccentState>,
    /// Which side of the black/white pair is on, if exactly one is.
    pub monochrome: Option<MonochromeAccent>,
    pub stock_dark_active: bool,
}

pub struct AccentManager<G> {
    catalog: Arc<Catalog>,
    gateway: G,
    user: UserId,
}

impl<G: OverlayGateway> AccentManager<G> {
    pub fn new(catalog: Arc<Catalog>, gateway: G, user: UserId) -> Self {
        Self {
            catalog,
            gateway,
            user,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    fn query(&self) -> ThemeStateQuery<'_, G> {
        ThemeStateQuery::new(&self.catalog, &self.gateway, self.user)
    }

    fn enforcer(&self) -> ExclusivityEnforcer<'_, G> {
        ExclusivityEnforcer::new(&self.catalog, &self.gateway, self.user)
    }

    /// Applies the user's accent choice.
    ///
    /// Issues a single enable, or disables every accent when the default
    /// slot is chosen with no theme family active. Other accents are left to
    /// the platform's own category exclusivity; see
    /// [`switch_accent`](Self::switch_accent) for the explicit variant.
    pub fn select_accent(&self, index: usize) -> AccentResult<AccentChange> {
        let plan = plan_accent(&self.catalog, index, &self.query().active_families())?;
        log::info!("Accent {index} for user {} resolved to {plan:?}", self.user);

        let mut report = ToggleReport::new();
        self.apply_plan(&plan, &mut report);
        Ok(AccentChange {
            requested: index,
            plan,
            report,
        })
    }

    /// Applies the user's accent choice and disables every other enabled accent.
    pub fn switch_accent(&self, index: usize) -> AccentResult<AccentChange> {
        let plan = plan_accent(&self.catalog, index, &self.query().active_families())?;
        log::info!(
            "Switching to accent {index} for user {} ({plan:?})",
            self.user
        );

        let mut report = ToggleReport::new();
        if let AccentPlan::Enable { index: target, .. } = plan {
            for (other, overlay) in self.catalog.toggleable_accents() {
                if other != target && read_enabled(&self.gateway, overlay, self.user) {
                    issue_toggle(&self.gateway, overlay, false, self.user, &mut report);
                }
            }
        }
        self.apply_plan(&plan, &mut report);

        Ok(AccentChange {
            requested: index,
            plan,
            report,
        })
    }

    /// Disables every accent overlay except the default slot.
    pub fn unload_accents(&self) -> ToggleReport {
        let mut report = ToggleReport::new();
        self.unload_accents_into(&mut report);
        report
    }

    fn unload_accents_into(&self, report: &mut ToggleReport) {
        for (_, overlay) in self.catalog.toggleable_accents() {
            issue_toggle(&self.gateway, overlay, false, self.user, report);
        }
        log::info!(
            "Unloaded accents for user {}: {} disabled, {} failed",
            self.user,
            report.successful,
            report.failed
        );
    }

    fn apply_plan(&self, plan: &AccentPlan, report: &mut ToggleReport) {
        match plan {
            AccentPlan::Enable { overlay, .. } => {
                issue_toggle(&self.gateway, overlay, true, self.user, report);
            }
            AccentPlan::UnloadAll => self.unload_accents_into(report),
        }
    }

    /// Turns a theme family's surface overlays on or off, then repairs the
    /// rules that depend on family state.
    ///
    /// The family's paired accent is not touched.
    pub fn set_family_enabled(&self, family: ThemeFamily, enabled: bool) -> ToggleReport {
        let mut report = ToggleReport::new();
        for overlay in self.catalog.family_members(family) {
            issue_toggle(&self.gateway, overlay, enabled, self.user, &mut report);
        }
        log::info!(
            "Theme family {family} {} for user {}",
            if enabled { "enabled" } else { "disabled" },
            self.user
        );

        let enforcer = self.enforcer();
        report.merge(enforcer.enforce_accent_pairing());
        if family == ThemeFamily::Dark && enabled {
            report.merge(enforcer.enforce_stock_dark_exclusion());
        }
        report
    }

    pub fn unload_stock_dark(&self) -> ToggleReport {
        self.enforcer().enforce_stock_dark_exclusion()
    }

    pub fn enforce_accent_pairing(&self) -> ToggleReport {
        self.enforcer().enforce_accent_pairing()
    }

    pub fn is_family_active(&self, family: ThemeFamily) -> bool {
        self.query().is_family_active(family)
    }

    pub fn active_families(&self) -> ActiveFamilies {
        self.query().active_families()
    }

    pub fn is_accent_active(&self, index: usize) -> AccentResult<bool> {
        self.query().is_accent_active(index)
    }

    pub fn status(&self) -> StatusSnapshot {
        let query = self.query();
        let enabled_accents: Vec<AccentState> = self
            .catalog
            .toggleable_accents()
            .filter(|(_, overlay)| read_enabled(&self.gateway, overlay, self.user))
            .map(|(index, overlay)| AccentState {
                index,
                overlay: overlay.clone(),
            })
            .collect();

        let is_on = |side: MonochromeAccent| {
            enabled_accents
                .iter()
                .any(|accent| accent.index == side.index(&self.catalog))
        };
        let monochrome = match (
            is_on(MonochromeAccent::Black),
            is_on(MonochromeAccent::White),
        ) {
            (true, false) => Some(MonochromeAccent::Black),
            (false, true) => Some(MonochromeAccent::White),
            _ => None,
        };

        StatusSnapshot {
            user: self.user,
            active_families: query.active_families(),
            enabled_accents,
            monochrome,
            stock_dark_active: query.is_stock_dark_active(),
        }
    }

    /// Runs one command and wraps its result in an [`AccentResponse`].
    pub fn execute_command(&self, command: AccentCommand) -> AccentResponse {
        log::debug!("Executing command: {command:?}");

        match self.handle_command(command) {
            Ok(response) => response,
            Err(error) => {
                log::error!("Command execution failed: {error}");
                AccentResponse::Error { error }
            }
        }
    }

    fn handle_command(&self, command: AccentCommand) -> AccentResult<AccentResponse> {
        let response = match command {
            AccentCommand::SelectAccent { index } => AccentResponse::AccentApplied {
                change: self.select_accent(index)?,
            },
            AccentCommand::SwitchAccent { index } => AccentResponse::AccentApplied {
                change: self.switch_accent(index)?,
            },
            AccentCommand::UnloadAccents => AccentResponse::AccentsUnloaded {
                report: self.unload_accents(),
            },
            AccentCommand::SetFamilyEnabled { family, enabled } => AccentResponse::FamilyToggled {
                family,
                enabled,
                report: self.set_family_enabled(family, enabled),
            },
            AccentCommand::UnloadStockDark => AccentResponse::StockDarkUnloaded {
                report: self.unload_stock_dark(),
            },
            AccentCommand::EnforceAccentPairing => AccentResponse::AccentPairingEnforced {
                report: self.enforce_accent_pairing(),
            },
            AccentCommand::IsAccentActive { index } => AccentResponse::AccentActive {
                index,
                active: self.is_accent_active(index)?,
            },
            AccentCommand::IsFamilyActive { family } => AccentResponse::FamilyActive {
                family,
                active: self.is_family_active(family),
            },
            AccentCommand::GetStatus => AccentResponse::Status {
                snapshot: self.status(),
            },
        };
        Ok(response)
    }
}
