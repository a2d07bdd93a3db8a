use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use hermes_osrm::{client::OsrmClient, location::Location, params::OsrmClientParams};
use serde::Serialize;
use tracing::info;

#[derive(Args)]
pub struct OsrmArgs {
    /// JSON file holding a list of [longitude, latitude] pairs
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Overrides OSRM_HOST
    #[arg(long)]
    host: Option<String>,

    /// Overrides OSRM_PORT
    #[arg(long)]
    port: Option<u16>,

    /// Overrides OSRM_PROFILE
    #[arg(long)]
    profile: Option<String>,
}

impl OsrmArgs {
    fn client(&self) -> anyhow::Result<OsrmClient> {
        let mut params = OsrmClientParams::from_env()?;

        if let Some(host) = &self.host {
            params.host = host.clone();
        }
        if let Some(port) = self.port {
            params.port = Some(port);
        }
        if let Some(profile) = &self.profile {
            params.profile = profile.clone();
        }

        Ok(OsrmClient::new(params))
    }

    fn locations(&self) -> anyhow::Result<Vec<Location>> {
        let f = File::open(&self.input)?;
        Ok(serde_json::from_reader(BufReader::new(f))?)
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn route(args: OsrmArgs, extra_args: &str) -> anyhow::Result<()> {
    let client = args.client()?;
    let locations = args.locations()?;

    let response = client.route(&locations, extra_args).await?;
    info!(
        "Route through {} locations: {} routes returned",
        locations.len(),
        response.routes.len()
    );

    print_json(&response)
}

pub async fn table(args: OsrmArgs) -> anyhow::Result<()> {
    let client = args.client()?;
    let locations = args.locations()?;

    let response = client.table(&locations).await?;
    info!("Table of {0}x{0} locations fetched", locations.len());

    print_json(&response)
}
