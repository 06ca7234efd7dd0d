pub mod active;
pub mod config;
pub mod entry;
pub mod model;

pub use active::{deduce_active_id, PageEnvironment, StaticEnvironment};
pub use config::{ConfigError, NavConfig};
pub use entry::{NavEntry, PathMatcher};
pub use model::{build_nav, NavFragment, NavLink};
