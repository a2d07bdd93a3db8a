use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Schema of the asap request file
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
    /// Schema of the asap output
    OutputJsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

fn write_schema(out: PathBuf, schema: String) -> Result<(), anyhow::Error> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, schema)?;

    Ok(())
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            write_schema(out, hermes_pareto::schema::generate_request_json_schema()?)?
        }
        GenerateSubcommands::OutputJsonSchema { out } => {
            write_schema(out, hermes_pareto::schema::generate_output_json_schema()?)?
        }
    }

    Ok(())
}
