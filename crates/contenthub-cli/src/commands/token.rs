//! Development bearer tokens.
//!
//! Production tokens come from the identity service; this mints tokens with
//! the configured secret for local use and manual testing.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{self, OutputFormat};
use contenthub_auth::JwtEncoder;
use contenthub_core::error::AppError;
use contenthub_entity::user::UserRole;

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Mint a signed token
    Issue {
        /// Numeric user id placed in `sub`
        #[arg(long)]
        user_id: i64,
        /// `admin` or `user`
        #[arg(long)]
        role: UserRole,
        /// Override the configured lifetime
        #[arg(long)]
        ttl_minutes: Option<u64>,
    },
}

/// A minted token.
#[derive(Debug, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub user_id: i64,
    pub role: UserRole,
    pub expires_at: DateTime<Utc>,
}

/// Execute token commands
pub async fn execute(
    args: &TokenArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    match &args.command {
        TokenCommand::Issue {
            user_id,
            role,
            ttl_minutes,
        } => {
            if let Some(ttl) = ttl_minutes {
                config.auth.token_ttl_minutes = *ttl;
            }
            let encoder = JwtEncoder::new(&config.auth);
            let (token, expires_at) = encoder.issue(*user_id, *role)?;

            match format {
                OutputFormat::Text => println!("{token}"),
                OutputFormat::Json => output::print_item(
                    &IssuedToken {
                        token,
                        user_id: *user_id,
                        role: *role,
                        expires_at,
                    },
                    format,
                ),
            }
        }
    }

    Ok(())
}
