//! influxorg - reconcile InfluxDB v2 organizations and their membership

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod manifest;
mod models;
mod output;
mod provider;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Initialize logging; `--debug` forces debug level, otherwise `RUST_LOG` applies
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("influxorg version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Get => cli::org::get(&opts).await,
        Commands::Create { name, description } => cli::org::create(&opts, &name, description).await,
        Commands::Update {
            name,
            description,
            members,
        } => cli::org::update(&opts, &name, description, members).await,
        Commands::Delete { name } => cli::org::delete(&opts, &name).await,
        Commands::Apply { manifest, dry_run } => cli::apply::run(&opts, &manifest, dry_run).await,
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "influxorg",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
