pub mod api;
pub mod config;
pub mod confirm;
pub mod handlers;
pub mod models;
pub mod view;

pub use handlers::{AppointmentsView, Outcome};
