pub mod app;
pub mod catalog_view;
pub mod constants;
pub mod formatters;
pub mod login_view;
pub mod panel;
pub mod robot_view;
pub mod state;
pub mod toast;
pub mod types;
pub mod views;
