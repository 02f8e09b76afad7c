use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roomscape")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "Roomscape.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Serve the app (default)
    Serve,
    /// Write the generated assets to the dist directory
    Build,
    /// Verify every token reference resolves in every theme
    Check,
}
