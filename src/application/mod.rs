pub mod auth;
pub mod services;
pub mod shell;
pub mod view_state;
pub mod views;
