use serde::{Deserialize, Serialize};

pub const DISABLED_HREF: &str = "#";

pub const NO_OP_HREF: &str = "javascript:void(0);";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathMatcher {
    /// The site root, any directory path, or any path containing `marker`.
    Home { marker: String },
    Contains { needle: String },
    Never,
}

impl PathMatcher {
    pub fn home(marker: impl Into<String>) -> Self {
        PathMatcher::Home {
            marker: marker.into(),
        }
    }

    pub fn contains(needle: impl Into<String>) -> Self {
        PathMatcher::Contains {
            needle: needle.into(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatcher::Home { marker } => {
                path == "/" || path.ends_with('/') || path.contains(marker.as_str())
            }
            PathMatcher::Contains { needle } => path.contains(needle.as_str()),
            PathMatcher::Never => false,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub href: String,
    pub icon: String,
    pub matcher: PathMatcher,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chip: Option<String>,
}

impl NavEntry {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        href: impl Into<String>,
        icon: impl Into<String>,
        matcher: PathMatcher,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: href.into(),
            icon: icon.into(),
            matcher,
            disabled: false,
            chip: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self.href = DISABLED_HREF.to_string();
        self
    }

    pub fn with_chip(mut self, chip: impl Into<String>) -> Self {
        self.chip = Some(chip.into());
        self
    }

    pub fn effective_href(&self) -> &str {
        match self.disabled {
            true => NO_OP_HREF,
            false => &self.href,
        }
    }
}
