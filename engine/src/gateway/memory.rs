use super::{OverlayGateway, UserId};
use crate::catalog::{Catalog, OverlayId, ThemeFamily};
use crate::errors::{GatewayError, GatewayResult};
use crate::report::Toggle;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashSet};

/// Overlay service simulated in memory.
///
/// Knows a fixed set of overlay ids and tracks which of them are enabled per
/// user. Every accepted write is appended to a toggle log so callers can
/// assert on exactly what an operation issued. Reads and writes can be made
/// to fail to exercise the fail-safe paths.
///
/// Single-threaded: state lives in `RefCell`s.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    known: RefCell<BTreeSet<OverlayId>>,
    enabled: RefCell<BTreeSet<(UserId, OverlayId)>>,
    toggles: RefCell<Vec<Toggle>>,
    failing_writes: RefCell<HashSet<OverlayId>>,
    unavailable: Cell<bool>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway that knows the given overlays, all disabled.
    pub fn with_overlays<I, O>(overlays: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<OverlayId>,
    {
        let gateway = Self::new();
        for overlay in overlays {
            gateway.register(overlay);
        }
        gateway
    }

    /// Gateway that knows every overlay in `catalog` except the default accent slot.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let gateway = Self::new();
        for (_, accent) in catalog.toggleable_accents() {
            gateway.register(accent.clone());
        }
        for family in ThemeFamily::ALL {
            for overlay in catalog.family_members(family) {
                gateway.register(overlay.clone());
            }
        }
        gateway.register(catalog.stock_dark().clone());
        gateway
    }

    pub fn register(&self, overlay: impl Into<OverlayId>) {
        self.known.borrow_mut().insert(overlay.into());
    }

    /// Sets overlay state directly, without recording a toggle.
    pub fn seed(&self, user: UserId, overlay: impl Into<OverlayId>, enabled: bool) {
        let overlay = overlay.into();
        self.register(overlay.clone());
        let mut state = self.enabled.borrow_mut();
        if enabled {
            state.insert((user, overlay));
        } else {
            state.remove(&(user, overlay));
        }
    }

    /// Current state of `overlay`, bypassing failure injection.
    pub fn is_on(&self, user: UserId, overlay: impl Into<OverlayId>) -> bool {
        self.enabled.borrow().contains(&(user, overlay.into()))
    }

    pub fn enabled_overlays(&self, user: UserId) -> Vec<OverlayId> {
        self.enabled
            .borrow()
            .iter()
            .filter(|(u, _)| *u == user)
            .map(|(_, overlay)| overlay.clone())
            .collect()
    }

    /// Every accepted write since creation or the last [`clear_toggles`](Self::clear_toggles).
    pub fn toggles(&self) -> Vec<Toggle> {
        self.toggles.borrow().clone()
    }

    pub fn clear_toggles(&self) {
        self.toggles.borrow_mut().clear();
    }

    /// Makes every write to `overlay` fail with [`GatewayError::Unavailable`].
    pub fn fail_writes_for(&self, overlay: impl Into<OverlayId>) {
        self.failing_writes.borrow_mut().insert(overlay.into());
    }

    /// Makes every read and write fail with [`GatewayError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    fn check_available(&self) -> GatewayResult<()> {
        if self.unavailable.get() {
            return Err(GatewayError::Unavailable(
                "in-memory overlay service is offline".to_string(),
            ));
        }
        Ok(())
    }
}

impl OverlayGateway for InMemoryGateway {
    fn is_enabled(&self, overlay: &OverlayId, user: UserId) -> GatewayResult<Option<bool>> {
        self.check_available()?;
        if !self.known.borrow().contains(overlay) {
            return Ok(None);
        }
        Ok(Some(self.is_on(user, overlay.clone())))
    }

    fn set_enabled(&self, overlay: &OverlayId, enabled: bool, user: UserId) -> GatewayResult<()> {
        self.check_available()?;
        if !self.known.borrow().contains(overlay) {
            return Err(GatewayError::UnknownOverlay(overlay.clone()));
        }
        if self.failing_writes.borrow().contains(overlay) {
            return Err(GatewayError::Unavailable(format!(
                "write to {overlay} rejected"
            )));
        }

        {
            let mut state = self.enabled.borrow_mut();
            if enabled {
                state.insert((user, overlay.clone()));
            } else {
                state.remove(&(user, overlay.clone()));
            }
        }
        self.toggles.borrow_mut().push(Toggle {
            overlay: overlay.clone(),
            enabled,
        });
        Ok(())
    }
}
