pub mod record;
pub mod criteria;
pub mod summary;

pub use record::*;
pub use criteria::*;
pub use summary::*;
