mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use shadematch::{Rgb, ShadeMatcher, catalog, process_request};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.command {
        Commands::Match { rgb, json, pretty } => {
            let result = match json {
                Some(body) => process_request(body.as_bytes())?,
                None => {
                    let [r, g, b] = rgb[..] else {
                        anyhow::bail!("expected exactly three components, got {}", rgb.len());
                    };
                    ShadeMatcher::new().match_rgb(Rgb::from_components(r, g, b)?)?
                }
            };
            let out = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{out}");
        }
        Commands::Catalog => {
            for shade in catalog() {
                println!("{:<5} {:<18} {}", shade.name, shade.rgb.to_string(), shade.undertone);
            }
        }
    }

    Ok(())
}
