use waitlist::configuration::get_configuration;
use waitlist::startup::build;
use waitlist::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("waitlist".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let config = get_configuration()?;
    let app = build(config)?;
    tracing::info!(port = app.port(), "Waitlist service listening");
    app.run().await?;

    Ok(())
}
