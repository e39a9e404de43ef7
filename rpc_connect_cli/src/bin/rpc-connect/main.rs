//! Main entry point for RpcConnectCli

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use rpc_connect_cli::application::APP;

/// Boot RpcConnectCli
fn main() {
    abscissa_core::boot(&APP);
}
