use crate::{config::RpcConnectCliConfig, prelude::*};
use abscissa_core::{config, Command, FrameworkError, Runnable};
use clap::Parser;
use rpc_connect::{
    state::ConnectStore,
    storage::saved_address,
    ConnectForm, TendermintClient, WebSocketClientFactory,
};
use std::path::PathBuf;

/// `connect` subcommand
#[derive(Command, Debug, Parser)]
pub struct ConnectCmd {
    /// RPC address, e.g. https://rpc.cosmos.network:443. Defaults to the
    /// last address connected to successfully.
    pub address: Option<String>,

    /// Key/value store to save the address in, overriding the config file
    #[clap(long)]
    pub storage: Option<PathBuf>,
}

impl Runnable for ConnectCmd {
    /// Connect and print the node status.
    fn run(&self) {
        let config = APP.config();
        let storage = config.open_storage().unwrap_or_else(|err| {
            status_err!("Can't open key/value store: {}", err);
            std::process::exit(1);
        });

        let address = match &self.address {
            Some(address) => address.clone(),
            None => saved_address(&storage)
                .unwrap_or_else(|err| {
                    status_err!("Can't read saved address: {}", err);
                    std::process::exit(1);
                })
                .unwrap_or_default(),
        };

        abscissa_tokio::run(&APP, async move {
            let mut form: ConnectForm<_, ConnectStore<TendermintClient>, _> =
                ConnectForm::new(WebSocketClientFactory, ConnectStore::new(), storage);
            form.set_address(address);

            if let Err(err) = form.submit().await {
                debug!("connect failed: {}", err);
                status_err!("{}", form.view().message.text());
                std::process::exit(1);
            }

            status_ok!("Connected", "{}", form.state().rpc_address());

            let client = match form.state_mut().take_client() {
                Some(client) => client,
                None => return,
            };

            match client.status().await {
                Ok(status) => {
                    println!("network:       {}", status.node_info.network);
                    println!("moniker:       {}", status.node_info.moniker);
                    println!("latest height: {}", status.sync_info.latest_block_height);
                    println!("catching up:   {}", status.sync_info.catching_up);
                }
                Err(err) => status_warn!("Can't fetch node status: {}", err),
            }

            if let Err(err) = client.close().await {
                debug!("error closing client: {}", err);
            }
        })
        .unwrap_or_else(|e| {
            status_err!("executor exited with error: {}", e);
            std::process::exit(1);
        });
    }
}

impl config::Override<RpcConnectCliConfig> for ConnectCmd {
    // Process the given command line options, overriding settings from
    // a configuration file using explicit flags taken from command-line
    // arguments.
    fn override_config(
        &self,
        mut config: RpcConnectCliConfig,
    ) -> Result<RpcConnectCliConfig, FrameworkError> {
        if let Some(storage) = &self.storage {
            config.storage_path = Some(storage.clone());
        }

        Ok(config)
    }
}
