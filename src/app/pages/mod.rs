pub mod placeholders;
pub mod routes;

pub use routes::{App, DashboardApp, Route};
