use crate::prelude::*;
use abscissa_core::{Command, Runnable};
use clap::Parser;
use rpc_connect::storage::saved_address;

/// `show-address` subcommand
#[derive(Command, Debug, Parser)]
pub struct ShowAddressCmd {}

impl Runnable for ShowAddressCmd {
    /// Print the saved address.
    fn run(&self) {
        let config = APP.config();
        let storage = config.open_storage().unwrap_or_else(|err| {
            status_err!("Can't open key/value store: {}", err);
            std::process::exit(1);
        });

        match saved_address(&storage) {
            Ok(Some(address)) => println!("{}", address),
            Ok(None) => println!("no saved RPC address, run the connect command first"),
            Err(err) => {
                status_err!("Can't read saved address: {}", err);
                std::process::exit(1);
            }
        }
    }
}
