use catalog::books::factory::create_seeded_catalog;
use catalog::catalog::routes::build_router;
use catalog::core::controller::AppState;
use catalog::core::domain::Configuration;
use catalog::utils::logs::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let (config, warnings) = Configuration::from_env();
    setup_tracing(&config);
    for warning in warnings {
        tracing::warn!("{}", warning);
    }

    let addr = config.socket_addr();
    let state = AppState::new(config, create_seeded_catalog());
    let app = build_router(state);

    tracing::info!("catalog listening on {}", addr);
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("catalog stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
