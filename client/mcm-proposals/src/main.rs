use clap::Parser;
use mcm_sdk::{read_proposals_config, RpcLedgerClient};

mod cli;
use crate::cli::{command::Command, config::ConfigCommands};

#[derive(Parser, Debug)]
#[command(term_width = 0)]
#[command(name = "mcm-proposals")]
#[command(version = option_env!("BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")))]
#[command(about = "MCM governance proposal tool", long_about = None)]
struct App {
    #[command(subcommand)]
    command: Command,
    /// Solana RPC URL or moniker (mainnet-beta, testnet, devnet, localhost)
    #[arg(long, short = 'u', value_name = "RPC_URL")]
    url: Option<String>,
}

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = App::parse();
    let (filename, config) = read_proposals_config()?;
    log::debug!("using config {}", filename.display());

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let res = match app.command {
        Command::SignersUpdate(args) => args.execute(&config, &mut handle),
        Command::ProgramUpgrade(args) => {
            let client = RpcLedgerClient::new(config.rpc_url(app.url.as_deref()));
            log::info!("connected to {}", client.get_rpc());
            args.execute(&client, &mut handle)
        }
        Command::AcceptOwnership(args) => args.execute(&config, &mut handle),
        Command::Config(command) => match command.command {
            ConfigCommands::Get(args) => args.execute(&mut handle),
            ConfigCommands::Set(args) => args.execute(&mut handle),
        },
    };

    match res {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    Ok(())
}
