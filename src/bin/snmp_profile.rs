//! snmp-profile: validate SNMP connection profiles.
//!
//! Checks one profile given on the command line, or every profile in a
//! TOML file, and reports the resolved security configuration.

use clap::Parser;
use snmp_profile::cli::args::{OutputArgs, ProfileArgs};
use snmp_profile::cli::fleet::ProfileSet;
use snmp_profile::cli::report::check_profile;
use std::path::PathBuf;
use std::process::ExitCode;

/// Validate SNMP connection profiles and derive their security settings.
#[derive(Debug, Parser)]
#[command(name = "snmp-profile", version, about)]
struct Args {
    /// TOML file with [[profile]] entries (instead of HOST).
    #[arg(short = 'f', long = "file", conflicts_with = "host")]
    file: Option<PathBuf>,

    /// Open a UDP session to each valid profile.
    #[arg(long = "connect")]
    connect: bool,

    #[command(flatten)]
    profile: ProfileArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    args.output.init_tracing();

    let profiles = match (&args.file, args.profile.profile()) {
        (Some(path), _) => match ProfileSet::load(path) {
            Ok(set) => set.profiles,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        (None, Some(profile)) => vec![profile],
        (None, None) => {
            eprintln!("Error: a HOST or --file is required");
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for profile in &profiles {
        let report = check_profile(profile, args.connect).await;
        failed |= report.is_failure();
        println!("{}", report.render(args.output.format));
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
