// src/cli/menu.rs
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::style;
use inquire::{Confirm, InquireError, Select, Text};
use rand_core::{CryptoRng, RngCore};

use crate::core::vault::{Vault, VaultError};
use crate::db::CredentialStore;
use crate::models::GenerationConstraints;

use super::handlers;

const GENERATE: &str = "🔐  Generate password";
const SHOW_TIME: &str = "⏱️  Show generation time";
const CHECK: &str = "🔍  Check password by login";
const SAVE: &str = "💾  Save password for login";
const EXIT: &str = "🚪  Exit";

pub fn run_cli_menu<S, R>(
    vault: &mut Vault<S, R>,
    default_length: usize,
    should_exit: Arc<AtomicBool>,
) -> anyhow::Result<()>
where
    S: CredentialStore,
    R: RngCore + CryptoRng,
{
    println!("╔══════════════════════════════════════╗");
    println!("║          🔑 PASSKEEPER               ║");
    println!("╚══════════════════════════════════════╝");

    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![GENERATE, SHOW_TIME, CHECK, SAVE, EXIT];
        let choice = match Select::new("Choose an option:", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let outcome = match choice {
            GENERATE => prompt_generate(vault, default_length),
            SHOW_TIME => show_time(vault),
            CHECK => check_password(vault),
            SAVE => save_password(vault),
            _ => break,
        };

        if let Err(e) = outcome {
            match e.downcast_ref::<VaultError>() {
                Some(vault_error) if vault_error.is_user_correctable() => {
                    println!("{} {}", style("❌").red(), vault_error);
                }
                Some(vault_error) => {
                    log::error!("Operation failed: {}", vault_error);
                    println!("{} Operation failed. See the log for details.", style("❌").red());
                }
                None => match e.downcast_ref::<InquireError>() {
                    Some(InquireError::OperationCanceled) => continue,
                    Some(InquireError::OperationInterrupted) => break,
                    _ => return Err(e),
                },
            }
        }
    }

    log::info!("Leaving interactive menu");
    Ok(())
}

fn prompt_generate<S, R>(vault: &mut Vault<S, R>, default_length: usize) -> anyhow::Result<()>
where
    S: CredentialStore,
    R: RngCore + CryptoRng,
{
    let length_input = Text::new("Password length:")
        .with_default(&default_length.to_string())
        .prompt()?;

    let length: usize = match length_input.trim().parse() {
        Ok(length) => length,
        Err(_) => {
            log::error!("Invalid password length input: {}", length_input);
            println!("{} Enter a valid password length.", style("❌").red());
            return Ok(());
        }
    };

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;

    let include_digits = Confirm::new("Include digits?")
        .with_default(true)
        .prompt()?;

    let include_special = Confirm::new("Include special characters?")
        .with_default(true)
        .prompt()?;

    let constraints = GenerationConstraints::new(length, include_uppercase, include_digits, include_special);
    handlers::handle_generate(vault, &constraints, false, &mut io::stdout())
}

fn show_time<S, R>(vault: &Vault<S, R>) -> anyhow::Result<()>
where
    S: CredentialStore,
    R: RngCore + CryptoRng,
{
    match vault.last_generated() {
        Some(result) => {
            let length = result.password().chars().count();
            handlers::write_timing(length, result.elapsed(), false, &mut io::stdout())
        }
        None => {
            println!("{} Generate a password first.", style("❗").yellow());
            Ok(())
        }
    }
}

fn check_password<S, R>(vault: &Vault<S, R>) -> anyhow::Result<()>
where
    S: CredentialStore,
    R: RngCore + CryptoRng,
{
    let login = Text::new("Login:").prompt()?;
    handlers::handle_get(vault, &login, false, &mut io::stdout())
}

fn save_password<S, R>(vault: &Vault<S, R>) -> anyhow::Result<()>
where
    S: CredentialStore,
    R: RngCore + CryptoRng,
{
    let login = Text::new("Login:").prompt()?;
    let credential = vault.save_last_generated(&login)?;
    println!("{} Password added for login: {}", style("✅").green(), credential.login);
    Ok(())
}
