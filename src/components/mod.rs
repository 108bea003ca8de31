//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod header;
mod icons;
mod kpi_cards;
mod sidebar;
mod video;
mod views;

pub use app::*;
pub use app_view::*;
pub use header::*;
pub use icons::*;
pub use kpi_cards::*;
pub use sidebar::*;
pub use video::*;
// Views are accessed via views::ViewName
