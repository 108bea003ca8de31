//! Mock dashboard data and the in-memory filtering the pages apply to it.

pub mod filters;
pub mod fixtures;
pub mod models;

pub use filters::*;
pub use fixtures::*;
pub use models::*;
