//! CLI module for User Registry
//!
//! Seeds a registry from configuration and runs a single operation:
//! - `list`: print all records
//! - `login`: authenticate a username/password pair
//! - `delete`: ask the record store to delete an id
//! - `index`: print records keyed by id

use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::user::SharedUserRegistry;

/// User Registry - in-process user records with login and id lookup
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run without a record store; delete will fail
    #[arg(long, global = true)]
    pub no_store: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print all records in insertion order
    List,

    /// Authenticate a username/password pair
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Delete a record through the record store
    Delete {
        #[arg(long)]
        id: i32,
    },

    /// Print records keyed by id
    Index,
}

/// Load configuration, seed the registry and run the requested command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);

    if cli.no_store {
        config.registry.store_enabled = false;
    }

    let registry = crate::create_shared_registry(&config.registry);
    execute(&registry, cli.command).await
}

async fn execute(registry: &SharedUserRegistry, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List => print_json(&registry.list().await),
        Command::Login { username, password } => {
            let user = registry
                .login(Some(username.as_str()), Some(password.as_str()))
                .await?;

            match user {
                Some(user) => {
                    info!(id = user.id(), "Login succeeded");
                    print_json(&user)
                }
                None => {
                    warn!(username = %username, "Login failed");
                    println!("no matching user");
                    Ok(())
                }
            }
        }
        Command::Delete { id } => {
            let deleted = registry.delete(id).await?;
            info!(id, deleted, "Delete finished");
            print_json(&deleted)
        }
        Command::Index => {
            let index: BTreeMap<_, _> = registry.index_by_id().await?.into_iter().collect();
            print_json(&index)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
