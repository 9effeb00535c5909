pub mod init;
pub mod reset;
pub mod send;
pub mod status;
pub mod watch;

use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Watch user activity and score fatigue")]
    Watch,
    #[command(about = "Display the current fatigue state")]
    Status,
    #[command(about = "Reset the fatigue state")]
    Reset,
    #[command(about = "Send a test stimulus to the device")]
    Send(send::SendArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        // In debug mode the msg_* macros route through tracing, so a
        // subscriber must be installed before any output happens.
        if is_debug_mode() {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Watch => watch::cmd().await,
            Commands::Status => status::cmd(),
            Commands::Reset => reset::cmd(),
            Commands::Send(args) => send::cmd(args).await,
        }
    }
}
