use clap::Parser;
use miette::Result;
use spritegen::cli::{Cli, Commands};
use spritegen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => spritegen::cli::generate::run(args, &printer)?,
        Commands::List(args) => spritegen::cli::list::run(args)?,
        Commands::Completions(args) => spritegen::cli::completions::run(args)?,
    }

    Ok(())
}
