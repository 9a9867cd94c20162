use clap::Parser;
use miette::Result;
use theming::cli::{Cli, Commands};
use theming::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => theming::cli::generate::run(args, &printer)?,
        Commands::Reload => theming::cli::reload::run(&printer)?,
        Commands::Wal => theming::cli::wal::run(&printer)?,
        Commands::Completions(args) => theming::cli::completions::run(args)?,
    }

    Ok(())
}
