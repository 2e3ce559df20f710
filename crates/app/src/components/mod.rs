pub mod header;
pub mod sub_header;

pub use header::Header;
pub use sub_header::SubHeader;
