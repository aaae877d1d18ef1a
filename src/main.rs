use anyhow::Context;
use booth::{
    configuration::get_configuration,
    services::Droid,
    startup::{run, RunOutcome},
};
use env_logger::Env;
use tokio::sync::oneshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;
    log::info!(
        "Starting exhibitor scraping for {}",
        configuration.application.listing_url
    );

    let droid = Droid::new(&configuration.webdriver)
        .await
        .with_context(|| {
            format!(
                "Failed to start a browser session on {}",
                configuration.webdriver.server_url
            )
        })?;
    log::info!("Driver and URL setup complete.");

    // First Ctrl-C aborts loading and still closes the browser. Once loading is
    // over the receiver is gone and Ctrl-C exits straight away.
    let (abort_sender, abort_receiver) = oneshot::channel::<()>();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() && abort_sender.send(()).is_err() {
            log::warn!("Interrupted, exiting");
            std::process::exit(130);
        }
    });
    let shutdown = async {
        if abort_receiver.await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let outcome = run(droid, &configuration, shutdown)
        .await
        .context("Fatal error during scraping")?;

    if let RunOutcome::Exported { count, path } = outcome {
        log::info!("Successfully extracted data for {} exhibitors", count);
        log::info!("Data saved to {}", path.display());
    }

    Ok(())
}
