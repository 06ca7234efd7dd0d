use dioxus::logger::tracing::{debug, info, warn};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub const MOUNT_POINT_SELECTOR: &str = "[data-app-nav]";
pub const FALLBACK_SELECTOR: &str = "main";
pub const HOST_ATTRIBUTE: &str = "data-app-nav-host";

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("Could not create nav host element! {0}")]
    CouldNotCreateHost(String),
    #[error("Could not insert nav host element! {0}")]
    CouldNotInsert(String),
}

pub trait PageDom {
    type Node: Clone;

    fn nav_container(&self) -> Option<Self::Node>;

    fn main_region(&self) -> Option<Self::Node>;

    /// A detached element carrying [`HOST_ATTRIBUTE`].
    fn create_host(&self) -> Result<Self::Node, MountError>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), MountError>;

    fn prepend_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), MountError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountPoint<N> {
    Container(N),
    MainRegion(N),
}

pub fn locate_mount_point<D: PageDom>(dom: &D) -> Option<MountPoint<D::Node>> {
    if let Some(container) = dom.nav_container() {
        return Some(MountPoint::Container(container));
    }
    dom.main_region().map(MountPoint::MainRegion)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountOutcome<N> {
    Appended(N),
    Prepended(N),
    NoMountPoint,
}

impl<N> MountOutcome<N> {
    pub fn host(&self) -> Option<&N> {
        match self {
            MountOutcome::Appended(host) | MountOutcome::Prepended(host) => Some(host),
            MountOutcome::NoMountPoint => None,
        }
    }
}

/// Inserts a host element for the nav bar. Pages without a slot are left untouched.
pub fn mount_nav<D: PageDom>(dom: &D) -> Result<MountOutcome<D::Node>, MountError> {
    let mount_point = match locate_mount_point(dom) {
        Some(mount_point) => mount_point,
        None => {
            debug!("No nav mount point on this page.");
            return Ok(MountOutcome::NoMountPoint);
        }
    };

    let host = dom.create_host()?;
    match mount_point {
        MountPoint::Container(container) => {
            dom.append_child(&container, &host)?;
            Ok(MountOutcome::Appended(host))
        }
        MountPoint::MainRegion(main) => {
            dom.prepend_child(&main, &host)?;
            Ok(MountOutcome::Prepended(host))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MountState {
    Unmounted,
    Mounted,
}

#[derive(Debug)]
pub struct NavMount {
    state: MountState,
}

impl NavMount {
    pub fn new() -> Self {
        Self {
            state: MountState::Unmounted,
        }
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    pub fn mount<D: PageDom>(&mut self, dom: &D) -> Result<Option<D::Node>, MountError> {
        if self.state == MountState::Mounted {
            warn!("Nav bar is already mounted, ignoring mount request.");
            return Ok(None);
        }

        match mount_nav(dom)? {
            MountOutcome::Appended(host) | MountOutcome::Prepended(host) => {
                info!("Mounted nav bar.");
                self.state = MountState::Mounted;
                Ok(Some(host))
            }
            MountOutcome::NoMountPoint => Ok(None),
        }
    }
}

impl Default for NavMount {
    fn default() -> Self {
        Self::new()
    }
}

pub trait DocumentLifecycle {
    fn is_loading(&self) -> bool;

    /// Runs `task` once, when DOMContentLoaded fires.
    fn on_ready(&self, task: Box<dyn FnOnce()>);
}

pub fn is_loading_state(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadyRun {
    Immediate,
    Deferred,
}

pub fn run_when_ready(lifecycle: &impl DocumentLifecycle, task: impl FnOnce() + 'static) -> ReadyRun {
    if lifecycle.is_loading() {
        debug!("Document still loading, deferring nav mount.");
        lifecycle.on_ready(Box::new(task));
        ReadyRun::Deferred
    } else {
        task();
        ReadyRun::Immediate
    }
}
