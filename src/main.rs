use clap::Parser;
use miette::Result;
use pixl::cli::{Cli, Commands};
use pixl::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Convert(args) => pixl::cli::convert::run(args, &printer)?,
        Commands::Palettes(args) => pixl::cli::palettes::run(args, &printer)?,
        Commands::Extract(args) => pixl::cli::extract::run(args, &printer)?,
        Commands::Completions(args) => pixl::cli::completions::run(args)?,
    }

    Ok(())
}
