use clap::Parser;
use ctp_df::cli::{Cli, Commands};
use ctp_df::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command.unwrap_or_else(|| Commands::Build(Default::default())) {
        Commands::Build(args) => ctp_df::cli::build::run(args, &printer)?,
        Commands::Show(args) => ctp_df::cli::show::run(args)?,
        Commands::Check(args) => ctp_df::cli::check::run(args, &printer)?,
        Commands::Completions(args) => ctp_df::cli::completions::run(args)?,
    }

    Ok(())
}
