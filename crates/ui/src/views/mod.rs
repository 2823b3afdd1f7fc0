mod home;
mod result;
mod state;
mod stats;

pub use home::HomeView;
pub use result::ResultPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use stats::StatsView;
pub use test::TestView;
