mod args;
mod commands;
mod error;
mod output;
mod store;
mod transport;

use std::rc::Rc;

use api::{ApiClient, ApiConfig};
use clap::Parser;

use crate::args::Cli;
use crate::error::CliError;
use crate::store::FileStore;
use crate::transport::ReqwestTransport;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let config = ApiConfig::from_values(cli.base_url.as_deref(), cli.timeout_secs.as_deref());
    let store = FileStore::new(cli.session_file.unwrap_or_else(FileStore::default_path));
    log::debug!("api base url {}", config.base_url);
    let api = ApiClient::new(ReqwestTransport::new()?, config, Rc::new(store));
    commands::run(&api, cli.command).await
}
