mod cli;
mod commands;
mod config;
mod records;

use anyhow::Result;
use clap::Parser;
use config::Config;
use itemgen::{ItemFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "itemgen=debug" } else { "itemgen=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            records,
            item,
            level,
            faction,
            item_type,
            quote_style,
            output,
            seed,
        } => {
            let config = Config::load()?;
            let path = config.records_path(records)?;
            let records = records::load(&path)?;
            let request = commands::generate::GenerateRequest {
                item,
                level: Level::new(level),
                filter: ItemFilter::new(faction, item_type),
                options: config.serializer_options(quote_style.map(Into::into)),
                output,
                seed,
            };
            commands::generate::handle(&records, &request)?;
        }

        Commands::Preview {
            records,
            item,
            level,
            json,
        } => {
            let path = Config::load()?.records_path(records)?;
            let records = records::load(&path)?;
            commands::preview::handle(&records, &item, Level::new(level), json)?;
        }

        Commands::List { records, facets } => {
            let path = Config::load()?.records_path(records)?;
            let records = records::load(&path)?;
            commands::list::handle(&records, facets)?;
        }

        Commands::Flatten { input, output } => {
            commands::flatten::handle(&input, output.as_deref())?;
        }

        Commands::Configure {
            quote_style,
            records,
            show,
        } => {
            commands::configure::handle(quote_style.map(Into::into), records, show)?;
        }
    }

    Ok(())
}
