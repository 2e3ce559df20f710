// Standalone components
pub mod button;
pub mod form_select;
pub mod page_header;
pub mod search_bar;

// Composite inputs
pub mod autocomplete;

// Layout
pub mod navbar;

// Re-exports for convenience
pub use autocomplete::*;
pub use button::*;
pub use form_select::*;
pub use navbar::*;
pub use page_header::*;
pub use search_bar::*;
