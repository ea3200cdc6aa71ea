use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use authbot::application::errors::BotError;
use authbot::application::services::serve;
use authbot::domain::traits::ChatPlatformClient;
use authbot::infrastructure::adapters::DiscordAdapter;
use authbot::infrastructure::config::{Config, Overrides};

#[derive(Parser)]
#[command(name = "authbot")]
#[command(about = "Renames members and grants them a role on a chat command", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, default_value = "authbot.yaml")]
    config: String,

    /// Bot token
    #[arg(long, env = "AUTHBOT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Command prefix
    #[arg(long, env = "AUTHBOT_PREFIX")]
    prefix: Option<String>,

    /// Name of the role to place authenticated members in
    #[arg(long, env = "AUTHBOT_ROLE")]
    role: Option<String>,

    /// Bot command name
    #[arg(long, env = "AUTHBOT_CMD")]
    cmd: Option<String>,

    /// "Playing" status shown on the bot
    #[arg(long, env = "AUTHBOT_STATUS")]
    status: Option<String>,

    /// Enable new member welcome message
    #[arg(long, env = "AUTHBOT_WELCOME", num_args = 0..=1, default_missing_value = "true")]
    welcome: Option<bool>,

    /// Message to send when a new user joins
    #[arg(long = "welcomemsg", env = "AUTHBOT_WELCOMEMSG")]
    welcome_message: Option<String>,

    /// Channel ID of channel to send welcome messages to (required if welcome is enabled)
    #[arg(long = "welcomechannel", env = "AUTHBOT_WELCOMECHANNEL")]
    welcome_channel: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot (default)
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            token: self.token.clone(),
            prefix: self.prefix.clone(),
            role: self.role.clone(),
            command: self.cmd.clone(),
            status: self.status.clone(),
            welcome: self.welcome,
            welcome_message: self.welcome_message.clone(),
            welcome_channel: self.welcome_channel.clone(),
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Version) => {
            println!("authbot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Commands::InitConfig) => init_config(),
        Some(Commands::Run) | None => run_bot(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Config {
    let path = std::path::Path::new(&cli.config);
    let config = if path.exists() {
        Config::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };
    config.with_overrides(cli.overrides())
}

fn run_bot(cli: &Cli) -> Result<(), BotError> {
    let config = load_config(cli);
    config.validate()?;

    if config.welcome.enabled {
        tracing::warn!(
            "Welcome messages are configured for channel {} but are not sent yet",
            config.welcome.channel
        );
    }

    let token = config.token().unwrap_or_default().to_string();
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;

    rt.block_on(async {
        let client: Arc<dyn ChatPlatformClient> = Arc::new(DiscordAdapter::new(token));
        serve(config, client, shutdown_signal()).await
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

fn init_config() -> Result<(), BotError> {
    let yaml = Config::default().to_yaml()?;
    println!("{}", yaml);
    println!("\nSave this to authbot.yaml and adjust as needed.");
    Ok(())
}
