//! genapi
//!
//! Generate the element-wise operator API from the operator catalog.
//!
//! Usage: `genapi [--root DIR] [--output FILE] [--from-registry] [--catalog-json]`

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

use cmpkit_genapi::{CatalogSource, GenConfig};

#[derive(Parser, Debug)]
#[command(name = "genapi")]
#[command(about = "Generate the element-wise operator API from the operator catalog")]
struct Args {
    /// Source root holding the operator declaration files
    #[arg(long, env = "CMPKIT_ROOT", default_value = ".")]
    root: PathBuf,

    /// Output file (defaults to <root>/api_gen.rs)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Read operators from the built-in operator table instead of the
    /// declaration files
    #[arg(long)]
    from_registry: bool,

    /// Print the normalized catalog as JSON instead of writing the API
    #[arg(long)]
    catalog_json: bool,
}

fn main() {
    cmpkit_genapi::init_logging();

    let args = Args::parse();

    let mut config = GenConfig::new(&args.root);
    if let Some(output) = args.output {
        config = config.with_output(output);
    }
    if args.from_registry {
        config = config.with_source(CatalogSource::Registry);
    }

    if args.catalog_json {
        match cmpkit_genapi::catalog_json(&config) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("{err}");
                process::exit(1);
            }
        }
        return;
    }

    match cmpkit_genapi::run(&config) {
        Ok(path) => info!("Generated {}", path.display()),
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}
