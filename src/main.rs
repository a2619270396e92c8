use clap::Parser;
use seocheck::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seocheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Audit { file, json }) => {
            seocheck::cli::audit::run(&file, json)?;
        }
        Some(Commands::Preview { file, json }) => {
            seocheck::cli::preview::run(&file, json)?;
        }
        Some(Commands::Slug { title }) => {
            seocheck::cli::slug::run(&title)?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
