use engine::errors::GatewayResult;
use engine::report::Toggle;
use engine::{OverlayGateway, OverlayId, UserId};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Logs and records writes without issuing them.
///
/// Reads see the writes recorded so far, so later steps of one operation
/// decide the same way they would against the real service.
#[derive(Debug)]
pub struct DryRunGateway<G> {
    inner: G,
    pending: RefCell<BTreeMap<(UserId, OverlayId), bool>>,
    skipped: RefCell<Vec<Toggle>>,
}

impl<G> DryRunGateway<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            pending: RefCell::new(BTreeMap::new()),
            skipped: RefCell::new(Vec::new()),
        }
    }

    /// Writes that would have been issued, in order.
    pub fn skipped(&self) -> Vec<Toggle> {
        self.skipped.borrow().clone()
    }
}

impl<G: OverlayGateway> OverlayGateway for DryRunGateway<G> {
    fn is_enabled(&self, overlay: &OverlayId, user: UserId) -> GatewayResult<Option<bool>> {
        if let Some(enabled) = self.pending.borrow().get(&(user, overlay.clone())) {
            return Ok(Some(*enabled));
        }
        self.inner.is_enabled(overlay, user)
    }

    fn set_enabled(&self, overlay: &OverlayId, enabled: bool, user: UserId) -> GatewayResult<()> {
        let action = if enabled { "enable" } else { "disable" };
        log::info!("[dry-run] would {action} {overlay} for user {user}");
        self.pending
            .borrow_mut()
            .insert((user, overlay.clone()), enabled);
        self.skipped.borrow_mut().push(Toggle {
            overlay: overlay.clone(),
            enabled,
        });
        Ok(())
    }
}
