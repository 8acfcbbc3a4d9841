use clap::{arg, command, value_parser, ArgMatches, Command, ValueEnum};
use nameguard::config::{config_to_toml, default_restrictions_config, read_config, RestrictionsConfig};
use nameguard::error::GuardError;
use nameguard::models::ValidationOutcome;
use nameguard::username_validation::verify_username;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_group_names(path: &PathBuf) -> Result<Vec<String>, GuardError> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect())
}

fn execute_check(matches: &ArgMatches) -> Result<ValidationOutcome, GuardError> {
    let username = matches
        .get_one::<String>("username")
        .ok_or_else(|| GuardError::Other {
            message: "Missing required `--username` argument".to_string(),
        })?;
    let groups_path = matches
        .get_one::<PathBuf>("groups")
        .ok_or_else(|| GuardError::Other {
            message: "Missing required `--groups` argument".to_string(),
        })?;
    let previous = matches.get_one::<String>("previous");
    let is_admin = matches.get_flag("admin");
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => read_config(path)?,
        None => RestrictionsConfig::default(),
    };
    let group_names = load_group_names(groups_path)?;

    let outcome = verify_username(
        username,
        previous.map(|name| name.as_str()),
        is_admin,
        &config,
        &group_names,
        ValidationOutcome::accepted(username),
    );

    match matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Text)
    {
        OutputFormat::Text => match &outcome {
            ValidationOutcome::Accepted { username } => println!("Accepted: {username}"),
            ValidationOutcome::Rejected { reason, field } => {
                println!("Rejected ({field}): {}", reason.phrase_key())
            }
        },
        OutputFormat::Json => println!("{}", serde_json::to_string(&outcome)?),
    }

    Ok(outcome)
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = command!()
        .subcommand(
            Command::new("check")
                .about("Check a username against a list of group names")
                .arg(arg!(--username <NAME> "The candidate username").required(true))
                .arg(
                    arg!(--previous <NAME> "The username currently on record, when renaming")
                        .required(false),
                )
                .arg(arg!(--admin "The requesting account is an administrator"))
                .arg(
                    arg!(--groups <FILE> "Path to a newline-delimited file of group names")
                        .value_parser(value_parser!(PathBuf))
                        .required(true),
                )
                .arg(
                    arg!(--config <FILE> "Path to a restrictions configuration file")
                        .value_parser(value_parser!(PathBuf))
                        .required(false)
                        .env("NAMEGUARD_CONFIG_FILE"),
                )
                .arg(
                    arg!(--format <FORMAT> "Output format")
                        .value_parser(value_parser!(OutputFormat))
                        .default_value("text"),
                ),
        )
        .subcommand(Command::new("default_config").about("Print a default configuration file"))
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("check") {
        match execute_check(matches) {
            Ok(outcome) => {
                if outcome.is_rejected() {
                    ExitCode::from(1)
                } else {
                    ExitCode::SUCCESS
                }
            }
            Err(err) => {
                println!("Error: {}", err);
                ExitCode::from(2)
            }
        }
    } else if matches.subcommand_matches("default_config").is_some() {
        match config_to_toml(default_restrictions_config()) {
            Ok(config) => {
                println!("{config}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                println!("Error: {}", err);
                ExitCode::from(2)
            }
        }
    } else {
        println!("Error: no subcommand given (try `nameguard --help`)");
        ExitCode::from(2)
    }
}
