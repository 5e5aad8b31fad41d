use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::util::SubscriberInitExt;
use waitlist::{app::App, config::get_configuration, telemetry::get_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().expect("Failed to read configuration.");

    get_subscriber(&config.log_level, std::io::stderr).init();

    let db = PgPoolOptions::new()
        .max_connections(50)
        .connect_with(config.database.with_db())
        .await
        .context("Could not connect to database")?;

    tracing::info!(port = config.application.port, "starting server");
    let app = App::with(config).await;
    app.serve(db).await.expect("The server should be running");

    Ok(())
}
