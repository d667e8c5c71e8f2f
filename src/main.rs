use std::fs::OpenOptions;
use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;

use passkeeper::cli::{self, Args, CliCommand};
use passkeeper::core::Config;
use passkeeper::{db, Vault, VaultError};

fn init_logging(config: &Config) -> anyhow::Result<()> {
    config.ensure_directories_exist()?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

fn run(args: Args, config: Config) -> anyhow::Result<()> {
    let db_path = args.db.clone().unwrap_or_else(|| config.database_path.clone());
    let store = db::init_store(&db_path);
    let mut vault = Vault::new(store);

    let default_length = config.default_password_length;
    let mut stdout = std::io::stdout();

    match args.command {
        Some(CliCommand::Generate(options)) => {
            cli::handlers::handle_generate(&mut vault, &options.constraints(default_length), args.json, &mut stdout)
        }
        Some(CliCommand::Time(options)) => {
            cli::handlers::handle_time(&mut vault, &options.constraints(default_length), args.json, &mut stdout)
        }
        Some(CliCommand::Get { login }) => {
            cli::handlers::handle_get(&vault, &login, args.json, &mut stdout)
        }
        Some(CliCommand::Add { login, options }) => cli::handlers::handle_add(
            &mut vault,
            &login,
            &options.constraints(default_length),
            args.json,
            &mut stdout,
        ),
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received, shutting down");
                    should_exit.store(true, Ordering::SeqCst);
                })?;
            }
            cli::menu::run_cli_menu(&mut vault, default_length, should_exit)?;
            println!("Goodbye!");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();

    match init_logging(&config) {
        Ok(()) => {
            for warning in &warnings {
                log::warn!("{}", warning);
            }
        }
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", config.log_file.display(), e);
            for warning in &warnings {
                eprintln!("Warning: {}", warning);
            }
        }
    }

    log::info!("Starting passkeeper");
    log::debug!("Loaded config: {:?}", config);

    let json = args.json;
    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = match e.downcast_ref::<VaultError>() {
                Some(vault_error) if !vault_error.is_user_correctable() => {
                    log::error!("{:#}", e);
                    "Operation failed. See the log for details.".to_string()
                }
                _ => {
                    log::warn!("{:#}", e);
                    e.to_string()
                }
            };

            if json {
                println!("{}", serde_json::json!({ "success": false, "error": message }));
            } else {
                eprintln!("❌ {}", message);
            }
            ExitCode::FAILURE
        }
    }
}
