//! # CLI Commands
//!
//! ```text
//! inventory [--config <path>] [--api-url <url>] <command>
//!
//!   list                                         print every product
//!   add --name <n> --quantity <q> --price <p>    create a product
//!   edit <id> [--name] [--quantity] [--price]    update a product
//!   delete <id> [--yes]                          delete after confirmation
//! ```

pub mod product;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use inventory_client::{ClientConfig, HttpProductApi, ProductApi};
use tracing::debug;

use crate::error::CliResult;

#[derive(Debug, Parser)]
#[command(name = "inventory", about = "Inventory product management", long_about = None)]
pub struct Cli {
    /// Path to inventory.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL; overrides the config file and INVENTORY_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every product
    List,
    /// Add a product
    Add(product::AddArgs),
    /// Edit an existing product
    Edit(product::EditArgs),
    /// Delete a product
    Delete(product::DeleteArgs),
}

/// What every command handler needs.
pub struct Context {
    pub api: Arc<dyn ProductApi>,
    pub config: ClientConfig,
}

impl Cli {
    /// Loads the client config, applying `--api-url` last.
    ///
    /// Validation runs once on the final values, so a valid `--api-url`
    /// replaces a malformed URL from the file or environment.
    pub fn load_config(&self) -> CliResult<ClientConfig> {
        let mut config = ClientConfig::read(self.config.clone())?;

        if let Some(url) = &self.api_url {
            debug!(url = %url, "Overriding API URL from command line");
            config.api.base_url = url.clone();
        }
        config.validate()?;

        Ok(config)
    }

    pub async fn run(self, out: &mut impl Write) -> CliResult<()> {
        let config = self.load_config()?;
        let api: Arc<dyn ProductApi> = Arc::new(HttpProductApi::new(&config)?);
        let ctx = Context { api, config };

        match self.command {
            Commands::List => product::list(&ctx, out).await,
            Commands::Add(args) => product::add(&ctx, args, out).await,
            Commands::Edit(args) => product::edit(&ctx, args, out).await,
            Commands::Delete(args) => {
                let stdin = io::stdin();
                product::delete(&ctx, args, &mut stdin.lock(), out).await
            }
        }
    }
}
