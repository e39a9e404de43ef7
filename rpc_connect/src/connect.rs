//! The connect form: one address, one attempt at a time.
//!
//! A form moves `Initial -> Submitting -> Success`, or back to `Initial`
//! with the error flag raised when the address is empty or the client
//! could not be created. `Success` is terminal.

use crate::{
    client::ClientFactory,
    error::{ConnectError, RpcError},
    state::ConnectState,
    storage::{KeyValueStore, RPC_ADDRESS_KEY},
    utils::websocket_address,
};

pub const HINT_MESSAGE: &str = "For any Cosmos SDK chain!";
pub const ERROR_MESSAGE: &str = "Oh no an error occured! Please try again later.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionPhase {
    Initial,
    Submitting,
    Success,
}

/// What a call to submit ended up doing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Submission {
    /// The form was not accepting submissions; nothing happened.
    Ignored,
    /// A client was created and published.
    Connected,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitButton {
    Connect,
    Loading,
    Connected,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Message {
    Hint,
    Error,
}

impl Message {
    pub fn text(&self) -> &'static str {
        match self {
            Message::Hint => HINT_MESSAGE,
            Message::Error => ERROR_MESSAGE,
        }
    }
}

/// Everything needed to render the form, derived from its state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormView {
    pub input_disabled: bool,
    pub button: SubmitButton,
    /// False once connected; the button no longer submits.
    pub button_submits: bool,
    pub message: Message,
}

/// Connect form over a client factory, a state sink and a key/value store.
pub struct ConnectForm<F, S, K> {
    address: String,
    phase: SubmissionPhase,
    error: bool,
    factory: F,
    state: S,
    storage: K,
}

impl<F, S, K> ConnectForm<F, S, K>
where
    F: ClientFactory,
    S: ConnectState<F::Client>,
    K: KeyValueStore,
{
    /// Creates an empty form in the `Initial` phase.
    pub fn new(factory: F, state: S, storage: K) -> Self {
        ConnectForm {
            address: String::new(),
            phase: SubmissionPhase::Initial,
            error: false,
            factory,
            state,
            storage,
        }
    }

    /// Address as typed, never websocket transformed.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Current submission phase.
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Whether the last attempt failed.
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Borrow the state sink.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Borrow the state sink mutably, e.g. to take the published client.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Borrow the key/value store.
    pub fn storage(&self) -> &K {
        &self.storage
    }

    /// Consumes the form, returning the state sink and the key/value store.
    pub fn into_parts(self) -> (S, K) {
        (self.state, self.storage)
    }

    /// Updates the typed address. Ignored while the input is disabled.
    pub fn set_address(&mut self, address: impl Into<String>) -> bool {
        if self.view().input_disabled {
            return false;
        }

        self.address = address.into();
        true
    }

    /// Derives what to render from the current phase and error flag.
    pub fn view(&self) -> FormView {
        let button = match self.phase {
            SubmissionPhase::Initial => SubmitButton::Connect,
            SubmissionPhase::Submitting => SubmitButton::Loading,
            SubmissionPhase::Success => SubmitButton::Connected,
        };

        FormView {
            input_disabled: self.phase != SubmissionPhase::Initial,
            button,
            button_submits: self.phase != SubmissionPhase::Success,
            message: if self.error {
                Message::Error
            } else {
                Message::Hint
            },
        }
    }

    /// Attempt a connection with the current address.
    ///
    /// Errors are also reflected in the form through the error flag; the
    /// returned error is for diagnostics only.
    pub async fn submit(&mut self) -> Result<Submission, ConnectError> {
        let ws_address = match self.begin()? {
            Some(ws_address) => ws_address,
            None => return Ok(Submission::Ignored),
        };

        let result = self.factory.create(&ws_address).await;

        self.settle(result)
    }

    /// First half of [`submit`](Self::submit): validates the address and
    /// moves to `Submitting`. Returns the websocket address to connect to,
    /// or `None` if the form is not accepting submissions.
    pub fn begin(&mut self) -> Result<Option<String>, ConnectError> {
        if self.phase != SubmissionPhase::Initial {
            tracing::debug!("ignoring submission in phase {:?}", self.phase);
            return Ok(None);
        }

        self.error = false;
        self.phase = SubmissionPhase::Submitting;

        if self.address.trim().is_empty() {
            self.fail();
            return Err(ConnectError::EmptyAddress);
        }

        Ok(Some(websocket_address(&self.address)))
    }

    /// Second half of [`submit`](Self::submit): applies the outcome of the
    /// client construction started after [`begin`](Self::begin).
    pub fn settle(
        &mut self,
        result: Result<F::Client, RpcError>,
    ) -> Result<Submission, ConnectError> {
        if self.phase != SubmissionPhase::Submitting {
            tracing::debug!("no attempt in flight, dropping outcome");
            return Ok(Submission::Ignored);
        }

        let client = match result {
            Ok(client) => client,
            Err(err) => {
                tracing::error!("could not connect to {}: {}", self.address, err);
                self.fail();
                return Err(err.into());
            }
        };

        self.state.set_connected(true);
        self.state.set_client(client);
        self.state.set_rpc_address(self.address.clone());
        self.phase = SubmissionPhase::Success;

        if let Err(err) = self.storage.set(RPC_ADDRESS_KEY, &self.address) {
            tracing::warn!("could not persist RPC address: {}", err);
        }

        tracing::info!("connected to {}", self.address);

        Ok(Submission::Connected)
    }

    fn fail(&mut self) {
        self.error = true;
        self.phase = SubmissionPhase::Initial;
    }
}
