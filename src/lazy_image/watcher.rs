use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use super::proximity::{ProximityConfig, Rect};

/// Invoked when an observed region comes near the viewport
pub type NearCallback = Rc<dyn Fn()>;

/// Identifies one registration with a [ProximityWatcher]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservationId(u64);
impl ObservationId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}
impl core::fmt::Display for ObservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "obs#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("viewport proximity detection is not supported in this environment")]
    Unsupported,
    #[error("the proximity watcher is no longer available")]
    Unavailable,
}

/// A shared service reporting when regions enter a margin around the viewport.
///
/// Implementations must deliver `on_near` at most once per registration and
/// must forget the registration before delivering it, so that a later
/// [ProximityWatcher::unobserve] of the same id is a no-op.
pub trait ProximityWatcher {
    fn observe(
        &self,
        region: Rect,
        config: ProximityConfig,
        on_near: NearCallback,
    ) -> Result<ObservationId, RegistrationError>;

    fn unobserve(&self, id: ObservationId);

    /// Informs the watcher that an observed region moved or was resized
    fn update_region(&self, id: ObservationId, region: Rect) {
        let _ = (id, region);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewportState {
    /// Not measured yet, registrations wait
    Pending,
    Known(Rect),
    Unsupported,
}

struct Registration {
    region: Rect,
    config: ProximityConfig,
    on_near: NearCallback,
}

struct RegistryInner {
    next_id: u64,
    viewport: ViewportState,
    registrations: BTreeMap<ObservationId, Registration>,
}
impl RegistryInner {
    fn take_near(&mut self, only: Option<ObservationId>) -> Vec<(ObservationId, NearCallback)> {
        let near_ids: Vec<ObservationId> = match self.viewport {
            ViewportState::Pending => Vec::new(),
            // Everything pending loads eagerly once proximity is known to be unavailable
            ViewportState::Unsupported => self.registrations.keys().copied().collect(),
            ViewportState::Known(viewport) => self
                .registrations
                .iter()
                .filter(|(_, reg)| reg.config.is_near(&reg.region, &viewport))
                .map(|(id, _)| *id)
                .collect(),
        };
        near_ids
            .into_iter()
            .filter(|id| only.is_none_or(|only| only == *id))
            .filter_map(|id| self.registrations.remove(&id).map(|reg| (id, reg.on_near)))
            .collect()
    }
}

/// The in-process [ProximityWatcher] fed with viewport measurements.
///
/// Cloning is cheap and every clone shares the same registrations.
#[derive(Clone)]
pub struct ProximityRegistry(Rc<RefCell<RegistryInner>>);
impl Default for ProximityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
impl ProximityRegistry {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(RegistryInner {
            next_id: 0,
            viewport: ViewportState::Pending,
            registrations: BTreeMap::new(),
        })))
    }

    /// Records the current viewport and notifies every region now near it
    pub fn set_viewport(&self, viewport: Rect) {
        let fired = {
            let mut inner = self.0.borrow_mut();
            if inner.viewport == ViewportState::Unsupported {
                log::debug!("ProximityRegistry::set_viewport - ignored, proximity unsupported");
                return;
            }
            inner.viewport = ViewportState::Known(viewport);
            inner.take_near(None)
        };
        Self::deliver(fired);
    }

    /// Declares that proximity cannot be computed here.
    ///
    /// Waiting registrations are delivered immediately and any further
    /// [ProximityWatcher::observe] fails with [RegistrationError::Unsupported].
    pub fn mark_unsupported(&self) {
        let fired = {
            let mut inner = self.0.borrow_mut();
            inner.viewport = ViewportState::Unsupported;
            inner.take_near(None)
        };
        log::warn!(
            "ProximityRegistry - proximity unsupported, releasing {} waiting registration(s)",
            fired.len()
        );
        Self::deliver(fired);
    }

    pub fn viewport(&self) -> Option<Rect> {
        match self.0.borrow().viewport {
            ViewportState::Known(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn deliver(fired: Vec<(ObservationId, NearCallback)>) {
        // No borrow is held here: callbacks are free to call back into the registry
        for (id, on_near) in fired {
            log::debug!("ProximityRegistry - {id} is near the viewport");
            on_near();
        }
    }
}
impl ProximityWatcher for ProximityRegistry {
    fn observe(
        &self,
        region: Rect,
        config: ProximityConfig,
        on_near: NearCallback,
    ) -> Result<ObservationId, RegistrationError> {
        let (id, fired) = {
            let mut inner = self.0.borrow_mut();
            if inner.viewport == ViewportState::Unsupported {
                return Err(RegistrationError::Unsupported);
            }
            let id = ObservationId(inner.next_id);
            inner.next_id += 1;
            inner.registrations.insert(
                id,
                Registration {
                    region,
                    config,
                    on_near,
                },
            );
            (id, inner.take_near(Some(id)))
        };
        log::debug!("ProximityRegistry::observe - {id} registered for {region:?}");
        Self::deliver(fired);
        Ok(id)
    }

    fn unobserve(&self, id: ObservationId) {
        if self.0.borrow_mut().registrations.remove(&id).is_some() {
            log::debug!("ProximityRegistry::unobserve - {id} released");
        }
    }

    fn update_region(&self, id: ObservationId, region: Rect) {
        let fired = {
            let mut inner = self.0.borrow_mut();
            match inner.registrations.get_mut(&id) {
                Some(reg) => reg.region = region,
                None => return,
            }
            inner.take_near(Some(id))
        };
        Self::deliver(fired);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, NearCallback) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, Rc::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn waits_for_viewport_then_fires_once() {
        let registry = ProximityRegistry::new();
        let (count, cb) = counter();
        registry
            .observe(Rect::new(0.0, 1000.0, 100.0, 100.0), ProximityConfig::default(), cb)
            .unwrap();
        assert_eq!(count.get(), 0);

        registry.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(count.get(), 0);
        assert_eq!(registry.len(), 1);

        // Scrolled down
        registry.set_viewport(Rect::new(0.0, 500.0, 800.0, 600.0));
        assert_eq!(count.get(), 1);
        assert!(registry.is_empty());

        registry.set_viewport(Rect::new(0.0, 900.0, 800.0, 600.0));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn fires_during_observe_when_already_near() {
        let registry = ProximityRegistry::new();
        registry.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));
        let (count, cb) = counter();
        let id = registry
            .observe(Rect::new(0.0, 0.0, 10.0, 10.0), ProximityConfig::default(), cb)
            .unwrap();
        assert_eq!(count.get(), 1);
        // Already forgotten, unobserve is harmless
        registry.unobserve(id);
        assert!(registry.is_empty());
    }

    #[test]
    fn unobserved_region_never_fires() {
        let registry = ProximityRegistry::new();
        let (count, cb) = counter();
        let id = registry
            .observe(Rect::new(0.0, 0.0, 10.0, 10.0), ProximityConfig::default(), cb)
            .unwrap();
        registry.unobserve(id);
        registry.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn region_update_can_trigger() {
        let registry = ProximityRegistry::new();
        registry.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));
        let (count, cb) = counter();
        let id = registry
            .observe(Rect::new(0.0, 5000.0, 10.0, 10.0), ProximityConfig::default(), cb)
            .unwrap();
        assert_eq!(count.get(), 0);
        registry.update_region(id, Rect::new(0.0, 100.0, 10.0, 10.0));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unsupported_releases_waiting_and_rejects_new() {
        let registry = ProximityRegistry::new();
        let (count, cb) = counter();
        registry
            .observe(Rect::new(0.0, 5000.0, 10.0, 10.0), ProximityConfig::default(), cb)
            .unwrap();
        registry.mark_unsupported();
        assert_eq!(count.get(), 1);

        let (_, cb) = counter();
        assert_eq!(
            registry.observe(Rect::default(), ProximityConfig::default(), cb),
            Err(RegistrationError::Unsupported)
        );
    }
}
