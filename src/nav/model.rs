use super::config::NavConfig;

pub const LINK_CLASS: &str = "app-nav__link";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub href: String,
    pub disabled: bool,
    pub active: bool,
    pub chip: Option<String>,
}

impl NavLink {
    pub fn class(&self) -> String {
        let mut class = LINK_CLASS.to_string();
        if self.disabled {
            class.push_str(" disabled");
        }
        if self.active {
            class.push_str(" active");
        }
        class
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavFragment {
    pub brand: String,
    pub links: Vec<NavLink>,
}

impl NavFragment {
    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|link| link.active)
    }
}

pub fn build_nav(config: &NavConfig, active_id: Option<&str>) -> NavFragment {
    let links = config
        .entries()
        .iter()
        .map(|entry| NavLink {
            id: entry.id.clone(),
            label: entry.label.clone(),
            icon: entry.icon.clone(),
            href: entry.effective_href().to_string(),
            disabled: entry.disabled,
            active: active_id == Some(entry.id.as_str()),
            chip: entry.chip.clone(),
        })
        .collect();

    NavFragment {
        brand: config.brand().to_string(),
        links,
    }
}

#[cfg(test)]
mod model_test {
    use super::*;
    use crate::nav::entry::NO_OP_HREF;

    #[test]
    fn one_link_per_entry_in_declaration_order() {
        let config = NavConfig::global();
        let fragment = build_nav(config, None);
        assert_eq!(fragment.brand, "ESP32 Companion");
        assert_eq!(fragment.links.len(), config.entries().len());
        for (link, entry) in fragment.links.iter().zip(config.entries()) {
            assert_eq!(link.id, entry.id);
            assert_eq!(link.label, entry.label);
            assert_eq!(link.icon, entry.icon);
        }
    }

    #[test]
    fn known_id_marks_exactly_one_link_active() {
        let fragment = build_nav(NavConfig::global(), Some("files"));
        let active: Vec<&NavLink> = fragment.links.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "files");
        assert_eq!(active[0].class(), "app-nav__link active");
    }

    #[test]
    fn unknown_id_marks_nothing_active() {
        let fragment = build_nav(NavConfig::global(), Some("nope"));
        assert!(fragment.active_link().is_none());
        assert!(build_nav(NavConfig::global(), None).active_link().is_none());
    }

    #[test]
    fn disabled_link_never_navigates() {
        for active_id in [None, Some("settings"), Some("lua")] {
            let fragment = build_nav(NavConfig::global(), active_id);
            let settings = fragment.links.iter().find(|l| l.id == "settings").unwrap();
            assert!(settings.disabled);
            assert_eq!(settings.href, NO_OP_HREF);
            assert!(settings.class().contains("disabled"));
        }
    }

    #[test]
    fn disabled_and_active_classes_combine() {
        let fragment = build_nav(NavConfig::global(), Some("settings"));
        let settings = fragment.active_link().unwrap();
        assert_eq!(settings.class(), "app-nav__link disabled active");
    }

    #[test]
    fn chips_only_on_entries_that_declare_them() {
        let fragment = build_nav(NavConfig::global(), None);
        for link in &fragment.links {
            match link.id.as_str() {
                "settings" => assert_eq!(link.chip.as_deref(), Some("soon")),
                _ => assert!(link.chip.is_none()),
            }
        }
    }

    #[test]
    fn enabled_links_keep_their_href() {
        let fragment = build_nav(NavConfig::global(), None);
        assert_eq!(fragment.links[1].href, "/lua-console.html");
    }
}
