use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use futures_util::{
    future::{AbortHandle, Abortable},
    task::{LocalSpawn, LocalSpawnExt},
    FutureExt,
};

use super::{
    fetch::{FetchError, ResourceFetcher},
    proximity::{ProximityConfig, Rect},
    watcher::{ObservationId, ProximityWatcher},
};

/// Neutral grey 4:3 picture shown until the target is ready
pub const DEFAULT_PLACEHOLDER_URI: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 4 3'>\
<rect width='4' height='3' fill='%23e2e8f0'/></svg>";

/// What a mounted loader currently displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderState {
    pub current_source: String,
    pub is_loading: bool,
    pub is_visible: bool,
}
impl LoaderState {
    fn initial(placeholder_uri: &str) -> Self {
        Self {
            current_source: placeholder_uri.to_owned(),
            is_loading: true,
            is_visible: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Created, not registered yet
    Idle,
    /// Registered with the watcher, waiting for proximity
    Observing,
    /// Proximity reached, fetch in flight
    Near,
    Loaded,
    /// Fetch failed, placeholder kept
    Failed,
}

pub type LoadedCallback = Rc<dyn Fn()>;
pub type StateListener = Rc<dyn Fn(&LoaderState)>;

/// Construction parameters of a [DeferredLoader]
#[derive(Clone)]
pub struct LoaderOptions {
    target_uri: String,
    alt_text: String,
    placeholder_uri: String,
    proximity: ProximityConfig,
    on_loaded: Option<LoadedCallback>,
}
impl core::fmt::Debug for LoaderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderOptions")
            .field("target_uri", &self.target_uri)
            .field("alt_text", &self.alt_text)
            .field("placeholder_uri", &self.placeholder_uri)
            .field("proximity", &self.proximity)
            .finish_non_exhaustive()
    }
}
impl LoaderOptions {
    pub fn new(target_uri: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            target_uri: target_uri.into(),
            alt_text: alt_text.into(),
            placeholder_uri: DEFAULT_PLACEHOLDER_URI.to_owned(),
            proximity: ProximityConfig::default(),
            on_loaded: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder_uri: impl Into<String>) -> Self {
        self.placeholder_uri = placeholder_uri.into();
        self
    }

    pub fn with_proximity(mut self, proximity: ProximityConfig) -> Self {
        self.proximity = proximity;
        self
    }

    pub fn with_on_loaded(mut self, on_loaded: impl Fn() + 'static) -> Self {
        self.on_loaded = Some(Rc::new(on_loaded));
        self
    }
}

struct LoaderCore {
    options: LoaderOptions,
    state: LoaderState,
    phase: LoaderPhase,
    /// Bumped on every restart and on destroy; callbacks from older epochs are stale
    epoch: u64,
    registration: Option<ObservationId>,
    fetch_abort: Option<AbortHandle>,
    destroyed: bool,
    listener: Option<StateListener>,
}

struct Shared {
    watcher: Rc<dyn ProximityWatcher>,
    fetcher: Rc<dyn ResourceFetcher>,
    spawner: Rc<dyn LocalSpawn>,
    core: RefCell<LoaderCore>,
}

/// Defers fetching a visual resource until its region nears the viewport.
///
/// One instance per mounted image. The instance goes through
/// [LoaderPhase::Idle], [LoaderPhase::Observing] and [LoaderPhase::Near] to end
/// in [LoaderPhase::Loaded] or [LoaderPhase::Failed]. Only a target change
/// restarts it. No borrow of the internal state is ever held while calling the
/// watcher, the fetcher, the state listener or the `on_loaded` callback, so
/// all of them may call back into the loader synchronously.
///
/// Dropping the loader is equivalent to [DeferredLoader::on_destroy].
pub struct DeferredLoader(Rc<Shared>);

impl DeferredLoader {
    pub fn new(
        options: LoaderOptions,
        watcher: Rc<dyn ProximityWatcher>,
        fetcher: Rc<dyn ResourceFetcher>,
        spawner: Rc<dyn LocalSpawn>,
    ) -> Self {
        let state = LoaderState::initial(&options.placeholder_uri);
        Self(Rc::new(Shared {
            watcher,
            fetcher,
            spawner,
            core: RefCell::new(LoaderCore {
                options,
                state,
                phase: LoaderPhase::Idle,
                epoch: 0,
                registration: None,
                fetch_abort: None,
                destroyed: false,
                listener: None,
            }),
        }))
    }

    /// Registers a listener receiving every committed state change
    pub fn set_listener(&self, listener: impl Fn(&LoaderState) + 'static) {
        self.0.core.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn state(&self) -> LoaderState {
        self.0.core.borrow().state.clone()
    }

    pub fn phase(&self) -> LoaderPhase {
        self.0.core.borrow().phase
    }

    pub fn target_uri(&self) -> String {
        self.0.core.borrow().options.target_uri.clone()
    }

    pub fn alt_text(&self) -> String {
        self.0.core.borrow().options.alt_text.clone()
    }

    /// Starts observing `region`. Only meaningful once, on a fresh loader.
    pub fn on_create(&self, region: Rect) {
        {
            let core = self.0.core.borrow();
            if core.destroyed || core.phase != LoaderPhase::Idle {
                log::warn!(
                    "DeferredLoader::on_create - ignored in phase {:?} (destroyed: {})",
                    core.phase,
                    core.destroyed
                );
                return;
            }
        }
        Shared::start(&self.0, region);
    }

    /// Restarts the whole lifecycle for a new target.
    ///
    /// The current registration is released and an in-flight fetch is aborted;
    /// its result, should it still arrive, is discarded.
    pub fn on_target_changed(&self, new_target_uri: impl Into<String>, region: Rect) {
        let new_target_uri = new_target_uri.into();
        let (registration, abort) = {
            let mut core = self.0.core.borrow_mut();
            if core.destroyed || core.options.target_uri == new_target_uri {
                return;
            }
            log::debug!(
                "DeferredLoader::on_target_changed - {} -> {new_target_uri}",
                core.options.target_uri
            );
            core.epoch += 1;
            core.phase = LoaderPhase::Idle;
            core.state = LoaderState::initial(&core.options.placeholder_uri);
            core.options.target_uri = new_target_uri;
            (core.registration.take(), core.fetch_abort.take())
        };
        if let Some(abort) = abort {
            abort.abort();
        }
        if let Some(id) = registration {
            self.0.watcher.unobserve(id);
        }
        Shared::notify(&self.0);
        Shared::start(&self.0, region);
    }

    /// Forwards a new position of the observed region to the watcher
    pub fn on_region_changed(&self, region: Rect) {
        let registration = self.0.core.borrow().registration;
        if let Some(id) = registration {
            self.0.watcher.update_region(id, region);
        }
    }

    /// Releases the watcher registration and makes every pending callback inert
    pub fn on_destroy(&self) {
        let (registration, abort) = {
            let mut core = self.0.core.borrow_mut();
            if core.destroyed {
                return;
            }
            core.destroyed = true;
            core.epoch += 1;
            (core.registration.take(), core.fetch_abort.take())
        };
        if let Some(abort) = abort {
            abort.abort();
        }
        if let Some(id) = registration {
            self.0.watcher.unobserve(id);
        }
        log::debug!("DeferredLoader::on_destroy - done");
    }
}
impl Drop for DeferredLoader {
    fn drop(&mut self) {
        self.on_destroy();
    }
}

impl Shared {
    fn start(this: &Rc<Self>, region: Rect) {
        let (epoch, proximity) = {
            let mut core = this.core.borrow_mut();
            core.phase = LoaderPhase::Observing;
            (core.epoch, core.options.proximity)
        };
        let weak = Rc::downgrade(this);
        let on_near = Rc::new(move || Self::on_near(&weak, epoch));

        match this.watcher.observe(region, proximity, on_near) {
            Ok(id) => {
                let still_observing = {
                    let mut core = this.core.borrow_mut();
                    let still_observing = !core.destroyed
                        && core.epoch == epoch
                        && core.phase == LoaderPhase::Observing;
                    if still_observing {
                        core.registration = Some(id);
                    }
                    still_observing
                };
                if !still_observing {
                    // Reported near (or torn down) before observe even returned
                    this.watcher.unobserve(id);
                }
            }
            Err(e) => {
                log::warn!("DeferredLoader - {e}, loading eagerly");
                Self::enter_near(this, epoch);
            }
        }
    }

    fn on_near(weak: &Weak<Self>, epoch: u64) {
        match weak.upgrade() {
            Some(this) => Self::enter_near(&this, epoch),
            None => log::debug!("DeferredLoader - proximity reported for a dropped loader"),
        }
    }

    fn enter_near(this: &Rc<Self>, epoch: u64) {
        let registration = {
            let mut core = this.core.borrow_mut();
            if core.destroyed || core.epoch != epoch || core.phase != LoaderPhase::Observing {
                log::debug!(
                    "DeferredLoader - discarding proximity report (phase {:?}, epoch {epoch}/{})",
                    core.phase,
                    core.epoch
                );
                return;
            }
            core.phase = LoaderPhase::Near;
            core.registration.take()
        };
        if let Some(id) = registration {
            this.watcher.unobserve(id);
        }

        let target_uri = {
            let mut core = this.core.borrow_mut();
            core.state.is_visible = true;
            core.options.target_uri.clone()
        };
        Self::notify(this);

        if target_uri.is_empty() {
            log::warn!("DeferredLoader - empty target, keeping the placeholder");
            {
                let mut core = this.core.borrow_mut();
                core.phase = LoaderPhase::Failed;
                core.state.is_loading = false;
            }
            Self::notify(this);
            return;
        }

        log::debug!("DeferredLoader - fetching {target_uri}");
        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        this.core.borrow_mut().fetch_abort = Some(abort_handle);

        let fetch = this.fetcher.fetch(&target_uri);
        let weak = Rc::downgrade(this);
        let task = Abortable::new(fetch, abort_registration).map(move |outcome| match outcome {
            Ok(result) => match weak.upgrade() {
                Some(this) => Self::complete(&this, epoch, result),
                None => log::debug!("DeferredLoader - fetch finished after the loader was dropped"),
            },
            Err(_aborted) => log::debug!("DeferredLoader - fetch aborted"),
        });

        if let Err(e) = this.spawner.spawn_local(task) {
            log::error!("DeferredLoader - could not spawn the fetch task: {e}");
            Self::complete(this, epoch, Err(FetchError::NotScheduled { uri: target_uri }));
        }
    }

    fn complete(this: &Rc<Self>, epoch: u64, result: Result<(), FetchError>) {
        let on_loaded = {
            let mut core = this.core.borrow_mut();
            if core.destroyed || core.epoch != epoch || core.phase != LoaderPhase::Near {
                log::debug!("DeferredLoader - discarding stale fetch result");
                return;
            }
            core.fetch_abort = None;
            core.state.is_loading = false;
            match result {
                Ok(()) => {
                    core.phase = LoaderPhase::Loaded;
                    core.state.current_source = core.options.target_uri.clone();
                    core.options.on_loaded.clone()
                }
                Err(e) => {
                    log::warn!("DeferredLoader - {e}");
                    core.phase = LoaderPhase::Failed;
                    None
                }
            }
        };
        Self::notify(this);
        if let Some(on_loaded) = on_loaded {
            on_loaded();
        }
    }

    fn notify(this: &Rc<Self>) {
        let (listener, state) = {
            let core = this.core.borrow();
            (core.listener.clone(), core.state.clone())
        };
        if let Some(listener) = listener {
            listener(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures_util::{future::LocalFutureObj, task::SpawnError};
    use tokio::sync::oneshot;

    use super::super::watcher::{NearCallback, RegistrationError};
    use super::*;

    /// Holds callbacks until the test decides the region is near
    #[derive(Default)]
    struct FakeWatcher {
        unsupported: bool,
        next_id: Cell<u64>,
        pending: RefCell<Vec<(ObservationId, NearCallback)>>,
        /// Every callback ever registered, to simulate late or duplicate deliveries
        history: RefCell<Vec<NearCallback>>,
        observe_calls: Cell<u32>,
        unobserve_calls: Cell<u32>,
    }
    impl FakeWatcher {
        fn unsupported() -> Self {
            Self {
                unsupported: true,
                ..Default::default()
            }
        }

        fn fire_all(&self) {
            let pending: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            for (_, cb) in pending {
                cb();
            }
        }

        fn fire_history(&self) {
            let history: Vec<_> = self.history.borrow().clone();
            for cb in history {
                cb();
            }
        }
    }
    impl ProximityWatcher for FakeWatcher {
        fn observe(
            &self,
            _region: Rect,
            _config: ProximityConfig,
            on_near: NearCallback,
        ) -> Result<ObservationId, RegistrationError> {
            self.observe_calls.set(self.observe_calls.get() + 1);
            if self.unsupported {
                return Err(RegistrationError::Unsupported);
            }
            let id = ObservationId::new(self.next_id.get());
            self.next_id.set(self.next_id.get() + 1);
            self.history.borrow_mut().push(on_near.clone());
            self.pending.borrow_mut().push((id, on_near));
            Ok(id)
        }

        fn unobserve(&self, id: ObservationId) {
            self.unobserve_calls.set(self.unobserve_calls.get() + 1);
            self.pending.borrow_mut().retain(|(pid, _)| *pid != id);
        }
    }

    /// Records requested URIs; the test resolves each fetch by hand
    #[derive(Default)]
    struct FakeFetcher {
        requests: RefCell<Vec<String>>,
        resolvers: RefCell<Vec<oneshot::Sender<Result<(), FetchError>>>>,
    }
    impl FakeFetcher {
        fn resolve(&self, index: usize, result: Result<(), FetchError>) {
            let tx = self.resolvers.borrow_mut().remove(index);
            // The receiver is gone when the fetch was aborted
            let _ = tx.send(result);
        }
    }
    impl ResourceFetcher for FakeFetcher {
        fn fetch(
            &self,
            uri: &str,
        ) -> futures_util::future::LocalBoxFuture<'static, Result<(), FetchError>> {
            self.requests.borrow_mut().push(uri.to_owned());
            let (tx, rx) = oneshot::channel();
            self.resolvers.borrow_mut().push(tx);
            let uri = uri.to_owned();
            async move {
                rx.await.unwrap_or(Err(FetchError::Failed {
                    uri,
                    reason: "resolver dropped".to_owned(),
                }))
            }
            .boxed_local()
        }
    }

    struct LocalSetSpawner;
    impl LocalSpawn for LocalSetSpawner {
        fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
            tokio::task::spawn_local(future);
            Ok(())
        }
    }

    struct Harness {
        watcher: Rc<FakeWatcher>,
        fetcher: Rc<FakeFetcher>,
        loaded_calls: Rc<Cell<u32>>,
        visibility_log: Rc<RefCell<Vec<bool>>>,
        loader: DeferredLoader,
    }
    fn harness(watcher: FakeWatcher, target: &str) -> Harness {
        let watcher = Rc::new(watcher);
        let fetcher = Rc::new(FakeFetcher::default());
        let loaded_calls = Rc::new(Cell::new(0));
        let visibility_log = Rc::new(RefCell::new(Vec::new()));

        let calls = loaded_calls.clone();
        let options = LoaderOptions::new(target, "Soto ayam")
            .with_on_loaded(move || calls.set(calls.get() + 1));
        let loader = DeferredLoader::new(
            options,
            watcher.clone(),
            fetcher.clone(),
            Rc::new(LocalSetSpawner),
        );
        let log = visibility_log.clone();
        loader.set_listener(move |state| log.borrow_mut().push(state.is_visible));
        Harness {
            watcher,
            fetcher,
            loaded_calls,
            visibility_log,
            loader,
        }
    }

    fn region() -> Rect {
        Rect::new(0.0, 0.0, 320.0, 240.0)
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    async fn in_local_set<F: std::future::Future<Output = ()>>(f: F) {
        tokio::task::LocalSet::new().run_until(f).await
    }

    #[test]
    fn initial_state_shows_placeholder() {
        let h = harness(FakeWatcher::default(), "img/soto.jpg");
        assert_eq!(h.loader.phase(), LoaderPhase::Idle);
        assert_eq!(
            h.loader.state(),
            LoaderState {
                current_source: DEFAULT_PLACEHOLDER_URI.to_owned(),
                is_loading: true,
                is_visible: false,
            }
        );
        assert_eq!(h.loader.alt_text(), "Soto ayam");
    }

    #[tokio::test]
    async fn successful_load_swaps_source_once() {
        in_local_set(async {
            let h = harness(FakeWatcher::default(), "img/soto.jpg");
            h.loader.on_create(region());
            assert_eq!(h.loader.phase(), LoaderPhase::Observing);
            assert!(!h.loader.state().is_visible);
            assert!(h.fetcher.requests.borrow().is_empty());

            h.watcher.fire_all();
            assert_eq!(h.loader.phase(), LoaderPhase::Near);
            assert!(h.loader.state().is_visible);
            assert_eq!(*h.fetcher.requests.borrow(), vec!["img/soto.jpg".to_owned()]);
            assert_eq!(h.watcher.unobserve_calls.get(), 1);

            h.fetcher.resolve(0, Ok(()));
            settle().await;

            assert_eq!(h.loader.phase(), LoaderPhase::Loaded);
            let state = h.loader.state();
            assert_eq!(state.current_source, "img/soto.jpg");
            assert!(!state.is_loading);
            assert!(state.is_visible);
            assert_eq!(h.loaded_calls.get(), 1);
        })
        .await
    }

    #[tokio::test]
    async fn failed_load_keeps_placeholder() {
        in_local_set(async {
            let h = harness(FakeWatcher::default(), "img/soto.jpg");
            h.loader.on_create(region());
            h.watcher.fire_all();
            h.fetcher.resolve(
                0,
                Err(FetchError::Failed {
                    uri: "img/soto.jpg".to_owned(),
                    reason: "404".to_owned(),
                }),
            );
            settle().await;

            assert_eq!(h.loader.phase(), LoaderPhase::Failed);
            let state = h.loader.state();
            assert_eq!(state.current_source, DEFAULT_PLACEHOLDER_URI);
            assert!(!state.is_loading);
            assert_eq!(h.loaded_calls.get(), 0);
            // No retry
            assert_eq!(h.fetcher.requests.borrow().len(), 1);
        })
        .await
    }

    #[tokio::test]
    async fn visibility_flips_once_and_never_reverts() {
        in_local_set(async {
            let h = harness(FakeWatcher::default(), "img/soto.jpg");
            h.loader.on_create(region());
            h.watcher.fire_all();
            h.fetcher.resolve(0, Ok(()));
            settle().await;

            let log = h.visibility_log.borrow();
            let first_visible = log.iter().position(|v| *v).unwrap();
            assert!(log[..first_visible].iter().all(|v| !v));
            assert!(log[first_visible..].iter().all(|v| *v));
        })
        .await
    }

    #[tokio::test]
    async fn duplicate_proximity_report_is_a_no_op() {
        in_local_set(async {
            let h = harness(FakeWatcher::default(), "img/soto.jpg");
            h.loader.on_create(region());
            h.watcher.fire_all();
            let state_before = h.loader.state();

            h.watcher.fire_history();
            assert_eq!(h.loader.state(), state_before);
            assert_eq!(h.fetcher.requests.borrow().len(), 1);
            assert_eq!(h.watcher.unobserve_calls.get(), 1);

            h.fetcher.resolve(0, Ok(()));
            settle().await;
            h.watcher.fire_history();
            assert_eq!(h.loader.phase(), LoaderPhase::Loaded);
            assert_eq!(h.loaded_calls.get(), 1);
        })
        .await
    }

    #[tokio::test]
    async fn destroy_during_fetch_discards_result() {
        in_local_set(async {
            let h = harness(FakeWatcher::default(), "img/soto.jpg");
            h.loader.on_create(region());
            h.watcher.fire_all();
            let state_before = h.loader.state();

            h.loader.on_destroy();
            h.fetcher.resolve(0, Ok(()));
            settle().await;

            assert_eq!(h.loader.state(), state_before);
            assert_eq!(h.loader.phase(), LoaderPhase::Near);
            assert_eq!(h.loaded_calls.get(), 0);
            // Deregistration happened on the near transition only
            assert_eq!(h.watcher.unobserve_calls.get(), 1);
        })
        .await
    }

    #[tokio::test]
    async fn destroy_before_proximity_never_fetches() {
        in_local_set(async {
            let h = harness(FakeWatcher::default(), "img/soto.jpg");
            h.loader.on_create(region());
            h.loader.on_destroy();
            assert_eq!(h.watcher.unobserve_calls.get(), 1);
            assert!(h.watcher.pending.borrow().is_empty());

            h.watcher.fire_history();
            settle().await;
            assert!(h.fetcher.requests.borrow().is_empty());
            assert!(!h.loader.state().is_visible);

            // Dropping after an explicit destroy does not deregister again
            let watcher = h.watcher.clone();
            drop(h);
            assert_eq!(watcher.unobserve_calls.get(), 1);
        })
        .await
    }

    #[tokio::test]
    async fn unsupported_watcher_loads_eagerly() {
        in_local_set(async {
            let h = harness(FakeWatcher::unsupported(), "img/soto.jpg");
            h.loader.on_create(region());
            assert_eq!(h.watcher.observe_calls.get(), 1);
            assert_eq!(*h.fetcher.requests.borrow(), vec!["img/soto.jpg".to_owned()]);
            assert!(h.loader.state().is_visible);

            h.fetcher.resolve(0, Ok(()));
            settle().await;
            assert_eq!(h.loader.state().current_source, "img/soto.jpg");
            assert_eq!(h.loaded_calls.get(), 1);
        })
        .await
    }

    #[tokio::test]
    async fn target_change_restarts_and_ignores_stale_fetch() {
        in_local_set(async {
            let h = harness(FakeWatcher::default(), "img/soto.jpg");
            h.loader.on_create(region());
            h.watcher.fire_all();

            h.loader.on_target_changed("img/rendang.jpg", region());
            assert_eq!(h.loader.phase(), LoaderPhase::Observing);
            assert_eq!(
                h.loader.state(),
                LoaderState {
                    current_source: DEFAULT_PLACEHOLDER_URI.to_owned(),
                    is_loading: true,
                    is_visible: false,
                }
            );

            // The first fetch resolves late and must not land
            h.fetcher.resolve(0, Ok(()));
            settle().await;
            assert_eq!(h.loader.state().current_source, DEFAULT_PLACEHOLDER_URI);
            assert_eq!(h.loaded_calls.get(), 0);

            h.watcher.fire_all();
            assert_eq!(
                *h.fetcher.requests.borrow(),
                vec!["img/soto.jpg".to_owned(), "img/rendang.jpg".to_owned()]
            );
            h.fetcher.resolve(0, Ok(()));
            settle().await;
            assert_eq!(h.loader.state().current_source, "img/rendang.jpg");
            assert_eq!(h.loaded_calls.get(), 1);
        })
        .await
    }

    #[tokio::test]
    async fn previous_target_proximity_report_is_ignored() {
        in_local_set(async {
            let h = harness(FakeWatcher::default(), "img/soto.jpg");
            h.loader.on_create(region());
            let first_on_near = h.watcher.history.borrow()[0].clone();

            h.loader.on_target_changed("img/rendang.jpg", region());
            assert_eq!(h.watcher.history.borrow().len(), 2);

            // The watcher reports the first registration late
            first_on_near();
            settle().await;
            assert_eq!(h.loader.phase(), LoaderPhase::Observing);
            assert!(h.fetcher.requests.borrow().is_empty());
            assert!(!h.loader.state().is_visible);

            // The current registration still works
            h.watcher.fire_all();
            assert_eq!(
                *h.fetcher.requests.borrow(),
                vec!["img/rendang.jpg".to_owned()]
            );
        })
        .await
    }

    #[tokio::test]
    async fn same_target_is_not_a_change() {
        in_local_set(async {
            let h = harness(FakeWatcher::default(), "img/soto.jpg");
            h.loader.on_create(region());
            h.loader.on_target_changed("img/soto.jpg", region());
            assert_eq!(h.watcher.observe_calls.get(), 1);
            assert_eq!(h.watcher.unobserve_calls.get(), 0);
        })
        .await
    }

    #[tokio::test]
    async fn empty_target_never_fetches() {
        in_local_set(async {
            let h = harness(FakeWatcher::default(), "");
            h.loader.on_create(region());
            h.watcher.fire_all();
            assert!(h.fetcher.requests.borrow().is_empty());
            assert_eq!(h.loader.phase(), LoaderPhase::Failed);
            assert!(!h.loader.state().is_loading);
            assert_eq!(h.loaded_calls.get(), 0);
        })
        .await
    }

    #[test]
    fn registry_firing_during_observe_is_handled() {
        use super::super::watcher::ProximityRegistry;

        let registry = ProximityRegistry::new();
        registry.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));
        // No runtime: the spawner reports a failure and the loader fails cleanly
        struct RefusingSpawner;
        impl LocalSpawn for RefusingSpawner {
            fn spawn_local_obj(&self, _: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
                Err(SpawnError::shutdown())
            }
        }
        let fetcher = Rc::new(FakeFetcher::default());
        let loader = DeferredLoader::new(
            LoaderOptions::new("img/soto.jpg", "Soto"),
            Rc::new(registry.clone()),
            fetcher.clone(),
            Rc::new(RefusingSpawner),
        );
        loader.on_create(region());
        assert!(registry.is_empty());
        assert_eq!(fetcher.requests.borrow().len(), 1);
        assert_eq!(loader.phase(), LoaderPhase::Failed);
        assert_eq!(loader.state().current_source, DEFAULT_PLACEHOLDER_URI);
    }
}
