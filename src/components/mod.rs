mod navbar;
pub use navbar::{render_nav_html, AppNav};
