pub mod filter;
pub mod aggregate;
pub mod projection;

pub use filter::{filter, matches_payload, matches_site, FilteredView};
pub use aggregate::aggregate;
pub use projection::project;
