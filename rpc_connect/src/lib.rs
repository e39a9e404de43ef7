pub use client::{ClientFactory, TendermintClient, WebSocketClientFactory};
pub use connect::{ConnectForm, FormView, Submission, SubmissionPhase};
pub use error::ConnectError;

pub mod client;
pub mod connect;
pub mod error;
pub mod state;
pub mod storage;
pub mod utils;
