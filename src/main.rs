use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_calorimetry::cli::{Cli, Commands};
use kira_calorimetry::ctx::Ctx;
use kira_calorimetry::genotype::ALLOW_LIST;
use kira_calorimetry::io;
use kira_calorimetry::pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().into_command() {
        Commands::Run(args) => {
            let mut ctx = Ctx::new(
                args.raw_dir,
                args.out,
                args.settings,
                args.json,
                env!("CARGO_PKG_VERSION"),
            );
            Pipeline::full().run(&mut ctx)?;
            print!("{}", io::summary::format_summary(&ctx));
            print_warnings(&ctx);
        }
        Commands::Validate(args) => {
            let mut ctx = Ctx::new(
                args.raw_dir,
                PathBuf::from("."),
                args.settings,
                false,
                env!("CARGO_PKG_VERSION"),
            );
            Pipeline::convert().run(&mut ctx)?;
            print_validate_summary(&ctx);
        }
        Commands::Genotypes => {
            for label in ALLOW_LIST {
                println!("{}", label);
            }
        }
    }

    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("kira-calorimetry validate ok");
    println!("files: {}", ctx.sources.len());
    println!("subjects: {}", ctx.metadata.len());
    println!("timeseries rows: {}", ctx.timeseries.len());
    print_warnings(ctx);
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
