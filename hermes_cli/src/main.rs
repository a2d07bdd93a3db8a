use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{asap::AsapArgs, generate::GenerateSubcommands, osrm::OsrmArgs};

mod asap;
mod generate;
mod osrm;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore the cost / completion time trade-off of a routing problem
    Asap {
        #[command(flatten)]
        args: AsapArgs,
    },
    /// Query the OSRM route service
    Route {
        #[command(flatten)]
        args: OsrmArgs,

        /// Appended verbatim to the query string, e.g. "&geometries=geojson"
        #[arg(long, default_value = "")]
        extra_args: String,
    },
    /// Query the OSRM table service
    Table {
        #[command(flatten)]
        args: OsrmArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Asap { args }) => asap::run(args)?,
        Some(Commands::Route { args, extra_args }) => osrm::route(args, &extra_args).await?,
        Some(Commands::Table { args }) => osrm::table(args).await?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}
