//! RpcConnectCli Subcommands

mod connect;
mod show_address;

use self::{connect::ConnectCmd, show_address::ShowAddressCmd};
use crate::config::RpcConnectCliConfig;
use abscissa_core::{config::Override, Command, Configurable, FrameworkError, Runnable};
use clap::Parser;
use std::path::{Path, PathBuf};

/// RpcConnectCli Subcommands
/// Subcommands need to be listed in an enum.
#[derive(Command, Debug, Parser, Runnable)]
pub enum RpcConnectCliCmd {
    /// Connect to a Tendermint RPC address and remember it
    Connect(ConnectCmd),
    /// Print the last successfully connected RPC address
    ShowAddress(ShowAddressCmd),
}

/// Entry point for the application. It needs to be a struct to allow using subcommands!
#[derive(Command, Debug, Parser)]
#[clap(author, about, version)]
pub struct EntryPoint {
    #[clap(subcommand)]
    cmd: RpcConnectCliCmd,

    /// Enable verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Use the specified config file
    #[clap(short, long)]
    pub config: Option<String>,
}

impl Runnable for EntryPoint {
    fn run(&self) {
        self.cmd.run()
    }
}

/// This trait allows you to define how application configuration is loaded.
impl Configurable<RpcConnectCliConfig> for EntryPoint {
    /// Location of the configuration file
    fn config_path(&self) -> Option<PathBuf> {
        // Generate ~/.rpc_connect/config.toml if it doesn't exist. This is the
        // only hook that runs before abscissa loads config.
        crate::config::init(self.config.as_deref().map(Path::new)).ok()
    }

    /// Apply changes to the config after it's been loaded, e.g. overriding
    /// values in a config file using command-line options.
    fn process_config(
        &self,
        config: RpcConnectCliConfig,
    ) -> Result<RpcConnectCliConfig, FrameworkError> {
        match &self.cmd {
            RpcConnectCliCmd::Connect(cmd) => cmd.override_config(config),
            RpcConnectCliCmd::ShowAddress(_) => Ok(config),
        }
    }
}
