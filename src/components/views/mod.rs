mod agents;
mod dashboard;
mod help;
mod live_feed;
mod past_feed;
mod reports;

pub use agents::*;
pub use dashboard::*;
pub use help::*;
pub use live_feed::*;
pub use past_feed::*;
pub use reports::*;
