//! Server configuration from command-line arguments.

use std::net::SocketAddr;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use cookbook::core::DEFAULT_MAX_DEPTH;
use cookbook::CookbookConfig;

/// Default bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cookbook-server", version, about = "Serve the cookbook over HTTP")]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Maximum number of recipes nested along one resolution path
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_depth: usize,
}

impl Cli {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            bind: self.bind,
            cookbook: CookbookConfig {
                max_depth: self.max_depth,
            },
        }
    }
}

/// Runtime configuration for the HTTP shell.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub cookbook: CookbookConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cookbook: CookbookConfig::default(),
        }
    }
}
