#![warn(unused_qualifications)]

use crate::error::RpcError;
use async_trait::async_trait;
use tendermint_rpc::{endpoint::status, Client, SubscriptionClient, WebSocketClient};
use tokio::task::JoinHandle;

type DriverHandle = JoinHandle<Result<(), tendermint_rpc::Error>>;

/// Builds a client from a websocket address. Any error is treated as a
/// failed attempt; any returned client as a usable handle.
#[async_trait]
pub trait ClientFactory {
    type Client: Send;

    async fn create(&self, ws_address: &str) -> Result<Self::Client, RpcError>;
}

/// Factory for [`TendermintClient`]s. Must be used from within a tokio runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebSocketClientFactory;

#[async_trait]
impl ClientFactory for WebSocketClientFactory {
    type Client = TendermintClient;

    async fn create(&self, ws_address: &str) -> Result<TendermintClient, RpcError> {
        TendermintClient::connect(ws_address).await
    }
}

/// An established websocket connection to a Tendermint node.
pub struct TendermintClient {
    rpc_client: WebSocketClient,
    driver: DriverHandle,
}

impl TendermintClient {
    /// Opens the transport, spawns its driver and says hi with a status
    /// request so unreachable or non-Tendermint endpoints fail here.
    pub async fn connect(ws_address: &str) -> Result<TendermintClient, RpcError> {
        if ws_address.is_empty() {
            return Err(RpcError::MissingEndpoint(
                "no websocket endpoint provided".to_string(),
            ));
        }

        let (rpc_client, driver) = new_rpc_ws_client(ws_address).await?;
        let driver = tokio::spawn(async move { driver.run().await });
        let client = TendermintClient { rpc_client, driver };

        match client.status().await {
            Ok(status) => {
                tracing::debug!(
                    "connected to {} at height {}",
                    status.node_info.network,
                    status.sync_info.latest_block_height
                );

                Ok(client)
            }
            Err(err) => {
                if let Err(close_err) = client.close().await {
                    tracing::debug!("error closing failed connection: {}", close_err);
                }

                Err(err)
            }
        }
    }

    pub fn rpc(&self) -> &WebSocketClient {
        &self.rpc_client
    }

    pub async fn status(&self) -> Result<status::Response, RpcError> {
        self.rpc_client.status().await.map_err(|e| e.into())
    }

    /// Closes the socket and waits for the driver to wind down.
    pub async fn close(self) -> Result<(), RpcError> {
        self.rpc_client.close()?;

        self.driver
            .await
            .map_err(|e| RpcError::Driver(e.to_string()))?
            .map_err(|e| e.into())
    }
}

impl std::fmt::Debug for TendermintClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TendermintClient").finish_non_exhaustive()
    }
}

pub async fn new_rpc_ws_client(
    address: &str,
) -> Result<(WebSocketClient, tendermint_rpc::WebSocketClientDriver), RpcError> {
    WebSocketClient::new(address).await.map_err(|e| e.into())
}
