//! Styled Dioxus components shared by the catalog front end.

pub mod components;

pub use components::*;
