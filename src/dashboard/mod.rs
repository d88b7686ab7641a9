pub mod options;
pub mod view;
pub mod session;

pub use options::{DashboardOptions, PayloadSlider, SiteOption, SliderMark};
pub use view::{render, render_distribution, render_outcomes, ChartView, DashboardView, Distribution};
pub use session::{SessionLimits, SessionRegistry, SessionSnapshot};
