// src/cli/handlers.rs
use std::io::Write;

use console::style;
use rand_core::{CryptoRng, RngCore};
use serde_json::json;

use anyhow::Result;

use crate::core::vault::Vault;
use crate::db::CredentialStore;
use crate::generators::charset;
use crate::models::GenerationConstraints;
use crate::utils::format_elapsed;

// Handlers for CLI commands. Each writes its outcome to `out` as text or JSON.

pub fn handle_generate<S, R, W>(
    vault: &mut Vault<S, R>,
    constraints: &GenerationConstraints,
    json: bool,
    out: &mut W,
) -> Result<()>
where
    S: CredentialStore,
    R: RngCore + CryptoRng,
    W: Write,
{
    let result = vault.generate(constraints)?;
    let entropy = charset::entropy_bits(constraints);

    if json {
        let body = json!({
            "success": true,
            "password": result.password(),
            "length": constraints.length,
            "constraints": constraints,
            "entropy_bits": entropy.round(),
        });
        writeln!(out, "{}", body)?;
    } else {
        writeln!(out, "Generated password: {}", result.password())?;
        writeln!(out, "Entropy: ~{:.0} bits", entropy)?;
    }
    Ok(())
}

pub fn handle_time<S, R, W>(
    vault: &mut Vault<S, R>,
    constraints: &GenerationConstraints,
    json: bool,
    out: &mut W,
) -> Result<()>
where
    S: CredentialStore,
    R: RngCore + CryptoRng,
    W: Write,
{
    let result = vault.generate(constraints)?;
    write_timing(constraints.length, result.elapsed(), json, out)
}

pub fn write_timing<W: Write>(
    length: usize,
    elapsed: std::time::Duration,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        let body = json!({
            "success": true,
            "length": length,
            "elapsed_ns": u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        });
        writeln!(out, "{}", body)?;
    } else {
        writeln!(out, "Generation time for length {}: {}", length, format_elapsed(elapsed))?;
    }
    Ok(())
}

pub fn handle_get<S, R, W>(vault: &Vault<S, R>, login: &str, json: bool, out: &mut W) -> Result<()>
where
    S: CredentialStore,
    R: RngCore + CryptoRng,
    W: Write,
{
    let password = vault.find_password_by_login(login)?;

    if json {
        let body = json!({
            "success": password.is_some(),
            "login": login,
            "password": password,
        });
        writeln!(out, "{}", body)?;
    } else {
        match password {
            Some(password) => writeln!(out, "Password for login '{}': {}", login, password),
            None => writeln!(out, "{} No password found for login '{}'.", style("❗").yellow(), login),
        }?;
    }
    Ok(())
}

pub fn handle_add<S, R, W>(
    vault: &mut Vault<S, R>,
    login: &str,
    constraints: &GenerationConstraints,
    json: bool,
    out: &mut W,
) -> Result<()>
where
    S: CredentialStore,
    R: RngCore + CryptoRng,
    W: Write,
{
    vault.generate(constraints)?;
    let credential = vault.save_last_generated(login)?;

    if json {
        let body = json!({
            "success": true,
            "credential": credential,
            "constraints": constraints,
        });
        writeln!(out, "{}", body)?;
    } else {
        writeln!(out, "{} Password added for login: {}", style("✅").green(), credential.login)?;
        writeln!(out, "Password: {}", credential.password)?;
    }
    Ok(())
}
