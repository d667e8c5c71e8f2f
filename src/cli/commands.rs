// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

use crate::models::GenerationConstraints;

/// Composition options shared by the generating commands
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Password length in characters (defaults to DEFAULT_PASSWORD_LENGTH)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Include uppercase letters
    #[arg(long, short)]
    pub uppercase: bool,

    /// Include digits
    #[arg(long, short)]
    pub digits: bool,

    /// Include special characters
    #[arg(long, short)]
    pub special: bool,
}

impl GenerateArgs {
    pub fn constraints(&self, default_length: usize) -> GenerationConstraints {
        GenerationConstraints::new(
            self.length.unwrap_or(default_length),
            self.uppercase,
            self.digits,
            self.special,
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate(GenerateArgs),

    /// Generate a password and report how long it took
    Time(GenerateArgs),

    /// Get the stored password for a login
    Get {
        /// Login to look up
        #[arg(required = true)]
        login: String,
    },

    /// Generate a password and store it under a login
    Add {
        /// Login to store the password under
        #[arg(required = true)]
        login: String,

        #[command(flatten)]
        options: GenerateArgs,
    },
}
