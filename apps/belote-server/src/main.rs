use std::process::ExitCode;

use belote_server::config::ServerConfig;
use belote_server::error::AppError;
use belote_server::telemetry;
use belote_server::transport::{self, MatchSettings};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();
    telemetry::init_tracing(config.log_format);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.code(), error = %err, "Server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), AppError> {
    config.validate()?;

    let settings = MatchSettings {
        deals: config.deals,
        table_seed: config.table_seed(),
        first_dealer: config.first_dealer_seat(),
    };
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(
        addr = %listener.local_addr()?,
        seed = settings.table_seed,
        deals = settings.deals,
        "Belote server listening"
    );

    let scores = transport::serve(listener, settings).await?;
    info!(team_0 = scores[0], team_1 = scores[1], "Match finished");
    Ok(())
}
