pub mod components;
pub mod nav;
pub mod page;
