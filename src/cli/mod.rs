pub mod completions;
pub mod generate;
pub mod list;

use clap::{Parser, Subcommand};

/// spritegen - procedural sprite set generator
#[derive(Parser, Debug)]
#[command(name = "spritegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the base sprite set and faction-tinted variants
    Generate(generate::GenerateArgs),

    /// List the sprite catalog and faction palettes
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
