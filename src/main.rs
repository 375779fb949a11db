mod analytics;
mod handlers;
mod models;
mod service;
mod store;
mod utils;

use anyhow::Result;

use crate::service::main_axum::start_axum_server;

#[tokio::main]
async fn main() -> Result<()> {
    start_axum_server(None).await
}
