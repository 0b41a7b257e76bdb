use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shadematch")]
#[command(about = "Match a sampled skin color to a foundation shade", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog shades for one color
    Match {
        /// Red, green and blue components (rounded and clamped to 0-255)
        #[arg(
            num_args = 3,
            value_names = ["R", "G", "B"],
            allow_negative_numbers = true,
            required_unless_present = "json",
            conflicts_with = "json"
        )]
        rgb: Vec<f64>,

        /// Raw request body instead of components, e.g. '{"rgb":[200,160,130]}'
        #[arg(long)]
        json: Option<String>,

        /// Pretty-print the JSON result
        #[arg(short, long)]
        pretty: bool,
    },

    /// List every shade in the catalog
    Catalog,
}
