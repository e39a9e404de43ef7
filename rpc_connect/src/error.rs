use thiserror::Error;

// Higher level errors: ConnectError
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("RPC address is empty")]
    EmptyAddress,
    #[error("error during RPC connection: {0}")]
    Rpc(#[from] RpcError),
}

// Lower level errors; should be used by higher level errors
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{0}")]
    MissingEndpoint(String),
    #[error("tendermint client error: {0}")]
    Client(#[from] tendermint_rpc::Error),
    #[error("websocket driver error: {0}")]
    Driver(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("error processing file: {0}")]
    FileIO(String),
    #[error("error intializing storage: {0}")]
    Initialization(String),
    #[error("error parsing toml: {0}")]
    Toml(String),
}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> StorageError {
        StorageError::FileIO(error.to_string())
    }
}
