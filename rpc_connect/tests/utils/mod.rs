#![allow(dead_code)]

use async_trait::async_trait;
use rpc_connect::{
    client::ClientFactory,
    error::{RpcError, StorageError},
    storage::KeyValueStore,
};
use std::sync::{Arc, Mutex};

/// Opaque stand-in for an established client
#[derive(Debug, PartialEq)]
pub struct MockClient {
    pub ws_address: String,
}

/// Factory that records every address it was asked to connect to
#[derive(Clone, Default)]
pub struct MockFactory {
    pub fail: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockFactory {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        MockFactory {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientFactory for MockFactory {
    type Client = MockClient;

    async fn create(&self, ws_address: &str) -> Result<MockClient, RpcError> {
        self.calls.lock().unwrap().push(ws_address.to_string());

        if self.fail {
            return Err(RpcError::Driver("connection refused".to_string()));
        }

        Ok(MockClient {
            ws_address: ws_address.to_string(),
        })
    }
}

/// Store whose writes always fail
#[derive(Default)]
pub struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::FileIO("read-only file system".to_string()))
    }
}
