use dioxus::logger::tracing::debug;

use super::config::NavConfig;

pub trait PageEnvironment {
    fn current_path(&self) -> String;

    /// `data-page` on the document element.
    fn page_marker(&self) -> Option<String>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub path: String,
    pub marker: Option<String>,
}

impl StaticEnvironment {
    pub fn new(path: impl Into<String>, marker: Option<String>) -> Self {
        Self {
            path: path.into(),
            marker,
        }
    }
}

impl PageEnvironment for StaticEnvironment {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn page_marker(&self) -> Option<String> {
        self.marker.clone()
    }
}

/// A non-empty page marker wins, then the first entry whose matcher accepts the path.
pub fn deduce_active_id(config: &NavConfig, env: &impl PageEnvironment) -> Option<String> {
    if let Some(marker) = env.page_marker().filter(|marker| !marker.is_empty()) {
        debug!("Active nav entry from page marker: {marker}");
        return Some(marker);
    }

    let mut path = env.current_path();
    if path.is_empty() {
        path = "/".to_string();
    }

    let active = config
        .entries()
        .iter()
        .find(|entry| entry.matcher.matches(&path))
        .map(|entry| entry.id.clone());
    debug!("Active nav entry for {path}: {active:?}");
    active
}
