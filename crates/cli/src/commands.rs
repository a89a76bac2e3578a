//! CLI commands

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use dialoguer::{Input, Password};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use taskdesk_core::{FileTokenStore, Settings};
use taskdesk_frontend::{
    ActionContext, ActionOutcome, EmployeeActions, LoginHandler, LoginOutcome, ManagerActions,
    session,
};
use taskdesk_http::{ApiClient, Method, TaskStatus};
use tracing::info;

use crate::config;
use crate::terminal::{TerminalConfirmer, TerminalLoginView, TerminalNavigator, TerminalNotifier};

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the access token
    Login {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long, env = "TASKDESK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored access token
    Logout,

    /// Show the configured server and whether a token is stored
    Status,

    /// Change the status of one of your tasks
    TaskStatus {
        employee_id: String,
        task_id: String,
        /// pending, in_progress or completed
        status: TaskStatus,
    },

    /// Re-enable an employee you manage
    Activate {
        manager_id: String,
        employee_id: String,
    },

    /// Disable an employee you manage
    Deactivate {
        manager_id: String,
        employee_id: String,
    },

    /// Send an authenticated request and print the JSON response
    Request {
        /// HTTP method (GET, POST, PUT, PATCH, DELETE)
        method: String,

        /// Path appended to the base URL, e.g. /manager/<id>/employees
        path: String,

        /// JSON request body
        #[arg(long)]
        body: Option<String>,
    },

    /// Configuration file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file with default values
    Init {
        /// Output file path
        #[arg(default_value = "taskdesk.json")]
        output: PathBuf,
    },

    /// Print the effective configuration
    Show,
}

/// Everything a command needs, built once from the settings
struct App {
    settings: Settings,
    tokens: Arc<FileTokenStore>,
    client: ApiClient,
}

impl App {
    fn open(settings: Settings) -> Result<Self> {
        let tokens = Arc::new(FileTokenStore::new(&settings.storage.token_file));

        let mut builder = ApiClient::builder()
            .base_url(&settings.api.base_url)
            .token_store(tokens.clone());
        if let Some(secs) = settings.api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &settings.api.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder.build()?;

        Ok(Self {
            settings,
            tokens,
            client,
        })
    }

    fn navigator(&self) -> TerminalNavigator {
        TerminalNavigator::new(&self.settings.api.base_url)
    }

    fn action_context(&self, assume_yes: bool) -> ActionContext {
        ActionContext::new(
            self.client.clone(),
            Box::new(TerminalConfirmer::new(assume_yes)),
            Box::new(TerminalNotifier),
            Box::new(self.navigator()),
        )
    }
}

impl Commands {
    pub async fn execute(self, settings: Settings, assume_yes: bool) -> Result<()> {
        match self {
            Commands::Config { command } => command.execute(&settings),
            Commands::Login { email, password } => {
                login(&App::open(settings)?, email, password).await
            }
            Commands::Logout => {
                let app = App::open(settings)?;
                session::logout(app.tokens.as_ref(), &app.navigator(), &app.settings.routes)
                    .await?;
                Ok(())
            }
            Commands::Status => status(&App::open(settings)?).await,
            Commands::TaskStatus {
                employee_id,
                task_id,
                status,
            } => {
                let app = App::open(settings)?;
                let outcome = EmployeeActions::new(app.action_context(assume_yes))
                    .update_task_status(&employee_id, &task_id, status)
                    .await;
                finish(outcome)
            }
            Commands::Activate {
                manager_id,
                employee_id,
            } => {
                let app = App::open(settings)?;
                let outcome = ManagerActions::new(app.action_context(assume_yes))
                    .activate_employee(&manager_id, &employee_id)
                    .await;
                finish(outcome)
            }
            Commands::Deactivate {
                manager_id,
                employee_id,
            } => {
                let app = App::open(settings)?;
                let outcome = ManagerActions::new(app.action_context(assume_yes))
                    .deactivate_employee(&manager_id, &employee_id)
                    .await;
                finish(outcome)
            }
            Commands::Request { method, path, body } => {
                raw_request(&App::open(settings)?, &method, &path, body.as_deref()).await
            }
        }
    }
}

impl ConfigCommands {
    pub fn execute(self, settings: &Settings) -> Result<()> {
        match self {
            ConfigCommands::Init { output } => {
                config::generate_default_config(&output)?;
                println!("Generated configuration at: {}", output.display());
                Ok(())
            }
            ConfigCommands::Show => {
                println!("{}", serde_json::to_string_pretty(settings)?);
                Ok(())
            }
        }
    }
}

async fn login(app: &App, email: Option<String>, password: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };

    let handler = LoginHandler::new(
        app.client.clone(),
        Box::new(TerminalLoginView::new(email, password)),
        Box::new(app.navigator()),
        app.settings.routes.clone(),
    );

    match handler.submit().await {
        LoginOutcome::LoggedIn { token_stored } => {
            info!(token_stored, "login complete");
            if !token_stored {
                eprintln!("The server did not issue an access token.");
            }
            Ok(())
        }
        // The view already printed the reason
        LoginOutcome::Invalid | LoginOutcome::Rejected(_) | LoginOutcome::Failed => {
            bail!("login failed")
        }
    }
}

async fn status(app: &App) -> Result<()> {
    let logged_in = session::has_token(app.tokens.as_ref()).await?;
    println!("Server:     {}", app.client.base_url());
    println!("Token file: {}", app.tokens.path().display());
    println!(
        "Logged in:  {}",
        if logged_in { "yes" } else { "no" }
    );
    Ok(())
}

async fn raw_request(app: &App, method: &str, path: &str, body: Option<&str>) -> Result<()> {
    let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .with_context(|| format!("invalid HTTP method {method:?}"))?;
    if !path.starts_with('/') {
        bail!("path must start with '/'");
    }
    let body: Option<serde_json::Value> = body
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()
        .context("--body is not valid JSON")?;

    let response = app.client.request(method, path, body.as_ref()).await?;
    match response {
        Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        None => println!("null"),
    }
    Ok(())
}

fn finish(outcome: ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Succeeded => Ok(()),
        ActionOutcome::Cancelled => {
            info!("cancelled");
            Ok(())
        }
        ActionOutcome::Failed(_) => bail!("action failed"),
    }
}
