pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "courtscout")]
#[command(about = "Crawl the Playtomic club directory city by city", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/courtscout/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Crawl the cities and write the aggregate results file
    Crawl {
        /// Output file for the city → clubs mapping
        #[arg(short, long, default_value = "club_links.json")]
        output: PathBuf,

        /// Crawl only these cities instead of the built-in list
        /// (repeatable)
        #[arg(long = "city", value_name = "CITY")]
        cities: Vec<String>,
    },
    /// List the built-in target cities
    Cities,
}
