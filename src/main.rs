mod server;

use crate::server::{bot, config::Config, error::AppError, router, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let state = startup::setup_state(&config)?;

    tracing::info!("Starting server");

    // Initialize the Discord bot with the same state the callback endpoint writes into
    let mut bot_client = bot::start::init_bot(&config, state.clone()).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(&mut bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let app = router::router().with_state(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Listening for OAuth callbacks on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
