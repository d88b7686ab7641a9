pub mod types;

pub use types::DashboardError;
