use clap::Parser;
use fluentd_dogstatsd::adapter::inbound::cli::{run, Cli};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match run::resolve_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.logging.init();
    info!("fluentd-dogstatsd starting");

    if let Err(e) = run::execute(config).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("fluentd-dogstatsd stopped");
}
