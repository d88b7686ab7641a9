pub mod health;
pub mod options;
pub mod charts;
pub mod sessions;
