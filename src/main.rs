use clap::Parser;
use coinrelay::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use coinrelay::adapter::inbound::cli::output::{self, OutputConfig};
use coinrelay::adapter::inbound::cli::{check, prices, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Prices(args) => prices::execute(args).await,
        Commands::Check(CheckCommand::Config(args)) => check::config::execute_config(args),
        Commands::Check(CheckCommand::Telegram(args)) => {
            check::telegram::execute_telegram(args).await
        }
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
