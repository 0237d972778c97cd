// Vizô dashboard fixture and its read-only HTTP surface
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::fixture::{dashboard_data, DASHBOARD_DATA};
pub use domain::dashboard::DashboardData;
