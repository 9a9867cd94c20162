pub mod completions;
pub mod generate;
pub mod reload;
pub mod wal;

use clap::{Parser, Subcommand};

/// theming - Terminal and desktop themes from an image
#[derive(Parser, Debug)]
#[command(name = "theming")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate theme artifacts from an image and run the configured commands
    Generate(generate::GenerateArgs),

    /// Re-run the configured reload commands for the current theme
    Reload,

    /// Symlink the generated artifacts into pywal's cache directory
    Wal,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
