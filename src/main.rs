use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;

use klone_cli::config::{LoadedConfig, load_config};
use klone_cli::error::KloneError;
use klone_cli::exec::execute_clone;
use klone_cli::resolve::plan_clone;

#[derive(Parser)]
#[command(name = "klone")]
#[command(
	author,
	version,
	about = "Clone repositories into a predictable local directory layout"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Repository URL (https://, ssh://git@, or git@host: form)
	url: Option<String>,

	/// Describe the resolved destination and command without cloning
	#[arg(short = 'n', long)]
	dry_run: bool,

	/// Path to the config file (overrides KLONE_CONFIG)
	#[arg(long, value_name = "PATH", global = true)]
	config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective configuration and its source
	Show,
	/// Check the config file for errors without running anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("Error: {e:#}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(cli.config.as_deref()),
				ConfigAction::Validate => handle_config_validate(cli.config.as_deref()),
			},
		};
	}

	let url = cli.url.ok_or(KloneError::MissingUrl)?;
	handle_clone(&url, cli.dry_run, cli.config.as_deref())
}

fn handle_clone(url: &str, dry_run: bool, config_path: Option<&Path>) -> Result<ExitCode> {
	let loaded = load_config(config_path).context("Failed to load configuration")?;

	// Classification errors must surface their fixed message text, so the
	// pipeline result is not wrapped with extra context.
	let plan = plan_clone(url, &loaded.config)?;

	if dry_run {
		println!("would clone repo using {}", plan.command_line());
		println!("would clone repo to {}", plan.destination.display());
		return Ok(ExitCode::SUCCESS);
	}

	let status = execute_clone(&plan)?;
	let exit_code = status.code().unwrap_or(1);
	Ok(ExitCode::from(exit_code as u8))
}

fn handle_config_show(config_path: Option<&Path>) -> Result<ExitCode> {
	let LoadedConfig { config, source } = load_config(config_path)?;

	match source {
		Some(path) => println!("# Source: {}", path.display()),
		None => println!("# Source: built-in defaults"),
	}
	println!("base_dir = {:?}", config.base_dir);
	println!("clone_command = {:?}", config.clone_command);

	if !config.domain_alias.is_empty() {
		println!();
		println!("[domain_alias]");
		let mut aliases: Vec<_> = config.domain_alias.iter().collect();
		aliases.sort();
		for (host, alias) in aliases {
			println!("{host:?} = {alias:?}");
		}
	}

	for replace in &config.path_replace {
		println!();
		println!("[[path_replace]]");
		println!("pattern = {:?}", replace.pattern);
		println!("replacement = {:?}", replace.replacement);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(config_path: Option<&Path>) -> Result<ExitCode> {
	match load_config(config_path) {
		Ok(loaded) => {
			match loaded.source {
				Some(path) => println!(
					"{} is valid ({} domain aliases, {} path replacements)",
					path.display(),
					loaded.config.domain_alias.len(),
					loaded.config.path_replace.len()
				),
				None => println!("No configuration file found; built-in defaults apply."),
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {e}");
			Ok(ExitCode::FAILURE)
		}
	}
}
