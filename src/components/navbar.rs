use dioxus::prelude::*;

use crate::nav::{NavFragment, NavLink};

#[component]
fn NavItem(link: NavLink) -> Element {
    let class = link.class();
    let NavLink {
        label,
        icon,
        href,
        chip,
        ..
    } = link;

    rsx! {
        li {
            a { class, href,
                span { "{icon}" }
                span { "{label}" }
                if let Some(chip) = chip {
                    span { class: "chip", "{chip}" }
                }
            }
        }
    }
}

/// Brand header followed by one link per navigation entry.
#[component]
pub fn AppNav(fragment: NavFragment) -> Element {
    let NavFragment { brand, links } = fragment;
    let items = links.into_iter().map(|link| {
        let key = link.id.clone();
        rsx! {
            NavItem { key: "{key}", link }
        }
    });

    rsx! {
        nav { class: "app-nav",
            div { class: "app-nav__brand",
                span { "{brand}" }
            }
            ul { class: "app-nav__links", {items} }
        }
    }
}

/// Static markup for pages that are served without the wasm bundle.
pub fn render_nav_html(fragment: NavFragment) -> String {
    dioxus_ssr::render_element(rsx! {
        AppNav { fragment }
    })
}

#[cfg(test)]
mod navbar_test {
    use super::render_nav_html;
    use crate::nav::{build_nav, NavConfig};

    #[test]
    fn renders_brand_and_every_link_in_order() {
        let html = render_nav_html(build_nav(NavConfig::global(), None));
        assert!(html.starts_with("<nav class=\"app-nav\">"));
        assert!(html.contains("<span>ESP32 Companion</span>"));
        assert_eq!(html.matches("<li>").count(), 4);

        let positions: Vec<usize> = ["Voice Assistant", "Lua Console", "File Manager", "Settings"]
            .iter()
            .map(|label| html.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn active_class_rendered_once_for_known_id() {
        let html = render_nav_html(build_nav(NavConfig::global(), Some("lua")));
        assert_eq!(html.matches(" active\"").count(), 1);
        assert!(html.contains("class=\"app-nav__link active\" href=\"/lua-console.html\""));
    }

    #[test]
    fn unknown_id_renders_no_active_class() {
        let html = render_nav_html(build_nav(NavConfig::global(), Some("missing")));
        assert!(!html.contains(" active\""));
    }

    #[test]
    fn disabled_entry_renders_no_op_link_with_chip() {
        let html = render_nav_html(build_nav(NavConfig::global(), None));
        assert!(html.contains("class=\"app-nav__link disabled\" href=\"javascript:void(0);\""));
        assert_eq!(html.matches("<span class=\"chip\">soon</span>").count(), 1);
    }
}
