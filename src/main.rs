mod ui;

use anyhow::Result;
use clap::{ArgAction, Parser};
use pasgen::{DeriveError, Field};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_RUNTIME_ERROR: u8 = 1;
const EXIT_INPUT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(
    name = "pasgen",
    version,
    author,
    about = "Deterministic password derivation using PBKDF2-HMAC-SHA512"
)]
struct Cli {
    /// Master password (8-64 characters), or `-` to type it without echo
    #[arg(required_unless_present = "list_policies")]
    password: Option<OsString>,

    /// Context salt (8-32 characters), or `-` to type it without echo
    #[arg(required_unless_present = "list_policies")]
    salt: Option<OsString>,

    /// Output length (8-64)
    #[arg(required_unless_present = "list_policies")]
    length: Option<String>,

    /// Output policy: base, specialSimple or specialAdvanced
    #[arg(default_value = pasgen::DEFAULT_POLICY)]
    policy: String,

    /// Print a settings and stats report to stderr
    #[arg(short, long)]
    stats: bool,

    /// List the available policies and exit
    #[arg(short, long)]
    list_policies: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DeriveError>() {
        Some(e) if e.is_input_error() => EXIT_INPUT_ERROR,
        _ => EXIT_RUNTIME_ERROR,
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = ui::DisplayOptions::detect();

    if cli.list_policies {
        ui::display_policies(&options);
        return Ok(());
    }

    let (Some(raw_password), Some(raw_salt), Some(raw_length)) =
        (&cli.password, &cli.salt, &cli.length)
    else {
        anyhow::bail!("PASSWORD, SALT and LENGTH are required");
    };

    // Range checks on the length run before any prompt.
    let length = pasgen::parse_length(raw_length)?;
    let password = ui::read_secret(raw_password, Field::Password)?;
    let salt = ui::read_secret(raw_salt, Field::Salt)?;

    tracing::debug!(policy = %cli.policy, length, "arguments accepted");

    if cli.stats {
        let policy = pasgen::validate(&password, &salt, length, &cli.policy)?;
        let (output, elapsed) = ui::show_progress(options.unicode_support, || {
            Ok(pasgen::convert_with_policy(&password, &salt, length, policy)?)
        })?;
        println!("{}", output.as_str());
        ui::display_report(policy, length, elapsed, &options);
    } else {
        let output = pasgen::convert(&password, &salt, length, &cli.policy)?;
        println!("{}", output.as_str());
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["pasgen", "TestPass123!", "MySalt123!", "16"]).unwrap();
        assert_eq!(cli.password.as_deref(), Some(OsStr::new("TestPass123!")));
        assert_eq!(cli.salt.as_deref(), Some(OsStr::new("MySalt123!")));
        assert_eq!(cli.length.as_deref(), Some("16"));
        assert_eq!(cli.policy, "specialSimple");
        assert!(!cli.stats);
    }

    #[test]
    fn test_explicit_policy_and_flags() {
        let cli = Cli::try_parse_from([
            "pasgen",
            "-s",
            "-vv",
            "TestPass123!",
            "MySalt123!",
            "20",
            "specialAdvanced",
        ])
        .unwrap();
        assert_eq!(cli.policy, "specialAdvanced");
        assert!(cli.stats);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_list_policies_needs_no_positionals() {
        let cli = Cli::try_parse_from(["pasgen", "--list-policies"]).unwrap();
        assert!(cli.list_policies);
        assert!(cli.password.is_none());
    }

    #[test]
    fn test_missing_positionals_rejected() {
        assert!(Cli::try_parse_from(["pasgen", "TestPass123!", "MySalt123!"]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        let input: anyhow::Error = DeriveError::Policy {
            name: "nope".to_string(),
        }
        .into();
        assert_eq!(exit_code(&input), EXIT_INPUT_ERROR);

        let runtime: anyhow::Error = DeriveError::CryptoProvider("unavailable".to_string()).into();
        assert_eq!(exit_code(&runtime), EXIT_RUNTIME_ERROR);

        let io = anyhow::anyhow!("Failed to read password");
        assert_eq!(exit_code(&io), EXIT_RUNTIME_ERROR);
    }

    #[test]
    fn test_run_rejects_before_prompting() {
        let cli = Cli::try_parse_from(["pasgen", "-", "-", "7"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INPUT_ERROR);
    }

    #[test]
    fn test_run_unknown_policy_is_input_error() {
        let cli =
            Cli::try_parse_from(["pasgen", "TestPass123!", "MySalt123!", "12", "no-such-policy"])
                .unwrap();
        let err = run(&cli).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INPUT_ERROR);
    }
}
