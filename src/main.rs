//! `dashboard-login` command-line front end.
//!
//! Renders the login form as terminal prompts, submits it once and reports
//! the outcome through the terminal navigator and notifier.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for username and password, then log in
//! cargo run -- login
//!
//! # Non-interactive: username as flag, password on stdin
//! echo "$PASSWORD" | cargo run -- login --username admin --password-stdin
//!
//! # Show which tokens are stored
//! cargo run -- status
//! ```
//!
//! # Exit Status
//!
//! - `0` - Logged in (or, for `status`, both tokens present)
//! - `1` - Login failed (or, for `status`, a token is missing)
//! - `130` - Interrupted with Ctrl-C while the request was in flight

use std::io::BufRead;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};

use dashboard_login::app;
use dashboard_login::application::services::LoginForm;
use dashboard_login::config::{self, Config};
use dashboard_login::domain::entities::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, mask_token};
use dashboard_login::domain::ports::TokenStore;
use dashboard_login::infrastructure::terminal::{TerminalNavigator, TerminalNotifier};
use dashboard_login::telemetry;

/// Log in to the dashboard and keep the issued tokens.
#[derive(Parser)]
#[command(name = "dashboard-login")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit credentials and store the issued tokens (default)
    Login {
        /// Username; prompted for when omitted
        #[arg(short, long)]
        username: Option<String>,

        /// Read the password from the first line of stdin instead of prompting
        #[arg(long)]
        password_stdin: bool,

        /// Wait for Enter after showing the failure alert
        #[arg(long)]
        acknowledge: bool,
    },

    /// Show whether access and refresh tokens are stored
    Status,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Login {
            username: None,
            password_stdin: false,
            acknowledge: false,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init(&config.log_level, &config.log_format);
    config.print_summary();

    let store = app::build_token_store(&config).await?;

    match cli.command.unwrap_or_default() {
        Commands::Login {
            username,
            password_stdin,
            acknowledge,
        } => login(&config, store, username, password_stdin, acknowledge).await,
        Commands::Status => status(store).await,
    }
}

/// Fills the form, submits it and maps the outcome to an exit status.
///
/// # Flow
///
/// 1. Take the username from `--username` or prompt for it
/// 2. Read the password from stdin or a hidden prompt
/// 3. Submit once; Ctrl-C abandons the in-flight request
/// 4. Success navigates to the dashboard route, failure shows the alert
async fn login(
    config: &Config,
    store: Arc<dyn TokenStore>,
    username: Option<String>,
    password_stdin: bool,
    acknowledge: bool,
) -> Result<ExitCode> {
    println!("{}", "🔑 Dashboard login".bright_blue().bold());
    println!();

    let mut form = LoginForm::new();

    form.set_username(match username {
        Some(u) => u,
        None => Input::<String>::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
    });

    form.set_password(if password_stdin {
        read_password_line()?
    } else {
        Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?
    });

    let service = app::build_login_service(
        config,
        store,
        Arc::new(TerminalNavigator::new()),
        Arc::new(TerminalNotifier::new(acknowledge)),
    )?;

    let Some(outcome) =
        app::until_interrupted(service.submit_form(&form), tokio::signal::ctrl_c()).await
    else {
        println!();
        println!("{}", "❌ Cancelled".red());
        return Ok(ExitCode::from(130));
    };

    if outcome.is_success() {
        println!();
        println!("{}", "✅ Logged in, tokens saved".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Prints stored token presence with masked values.
///
/// # Output Format
///
/// ```text
/// 📋 Stored tokens
///
///   access_token   eyJhbG…
///   refresh_token  missing
/// ```
async fn status(store: Arc<dyn TokenStore>) -> Result<ExitCode> {
    println!("{}", "📋 Stored tokens".bright_blue().bold());
    println!();

    let mut all_present = true;

    for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
        let value = store
            .get(key)
            .await
            .with_context(|| format!("Failed to read {key}"))?;

        match value {
            Some(token) => println!(
                "  {} {}",
                format!("{key:<14}").cyan(),
                mask_token(&token).bright_black()
            ),
            None => {
                all_present = false;
                println!("  {} {}", format!("{key:<14}").cyan(), "missing".yellow());
            }
        }
    }

    println!();

    Ok(if all_present {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Reads one line from stdin without the trailing newline.
fn read_password_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
