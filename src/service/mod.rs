pub mod main_axum;
pub mod state;
