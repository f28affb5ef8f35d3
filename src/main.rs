//! tokenops - Solana token-account manager and single-shot Jupiter swap CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tokenops::adapters::cli::{CliApp, Command};
use tokenops::application::{self, accounts, swap};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present (the underlying SDKs read their own variables)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug);

    let session = application::bootstrap().await?;

    match app.command {
        Command::AccountsPrint => {
            accounts::print_accounts(&session);
            Ok(())
        }
        Command::AccountsCreate => accounts::create_accounts(&session).await,
        Command::AccountsClose(cmd) => accounts::close_accounts(&session, &cmd.receiver).await,
        Command::Swap => swap::swap(&session).await,
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).init();
}
