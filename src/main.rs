use clap::Parser;
use dotenv::dotenv;
use rusty_crm::{
    logging::init_logging,
    prelude::{command::Cli, run_app},
};
use std::process::exit;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run_app(cli).await {
        tracing::error!(error = %e, "server failed");
        exit(1);
    }
}
