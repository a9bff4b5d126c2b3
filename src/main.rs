use anyhow::Context;
use vibenest::{
    configuration::get_configuration,
    startup::{Application, get_connection_pool},
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("vibenest".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration.")?;

    sqlx::migrate!("./migrations")
        .run(&get_connection_pool(&config.database))
        .await
        .context("Failed to migrate the database.")?;

    let app = Application::build(config).await?;
    tracing::info!(port = app.port(), "Serving the VibeNest landing page");

    if let Err(e) = app.run_until_stopped().await {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "API failed"
        );
        return Err(e.into());
    }

    tracing::info!("API has exited");
    Ok(())
}
