use crate::{
    build, constants,
    error::Result,
    origin::ExecutionContext,
    source, target,
};
use clap::{error::ErrorKind, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Command-line arguments structure for Stencil.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory where the new project will be created
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// Name of the template to provision
    #[arg(short, long, default_value = constants::DEFAULT_TEMPLATE)]
    pub template: String,

    /// Run the package-manager install and build steps after provisioning
    #[arg(short, long)]
    pub build: bool,

    /// Enable verbose logging output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after printing help or version text
/// * With status code 1 on any other argument error, before any
///   filesystem action
pub fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(constants::exit_codes::SUCCESS);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(constants::exit_codes::FAILURE);
        }
    }
}

/// Maps the counted --verbose flag onto a log level filter.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Runs a provisioning operation end to end.
///
/// Target validation runs before any write. The execution context, captured
/// once by the caller, selects the materialization strategy; the build
/// trigger only runs after materialization succeeded.
pub fn run(args: Args, context: ExecutionContext) -> Result<()> {
    let target_dir = target::ensure_provisionable(&args.target_dir)?;

    log::debug!("Execution context: {context}");

    let source = source::from_context(context);
    source.materialize(&args.template, &target_dir)?;

    if args.build {
        build::run_build(&target_dir)?;
    }

    println!("Project provisioned successfully in {}.", target_dir.display());
    Ok(())
}
