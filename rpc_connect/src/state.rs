//! Application state published by a successful connection.

/// Narrow state-update interface the connect form writes to.
///
/// Nothing here is ever cleared by the form; a consumer that wants a
/// disconnect path owns that itself.
pub trait ConnectState<C> {
    /// Mark the application as connected (or not).
    fn set_connected(&mut self, connected: bool);
    /// Hand over ownership of an established client.
    fn set_client(&mut self, client: C);
    /// Record the address the client was created from, as the user typed it.
    fn set_rpc_address(&mut self, address: String);
}

/// In memory [`ConnectState`] implementation.
#[derive(Debug)]
pub struct ConnectStore<C> {
    connected: bool,
    client: Option<C>,
    rpc_address: String,
}

impl<C> Default for ConnectStore<C> {
    fn default() -> Self {
        ConnectStore {
            connected: false,
            client: None,
            rpc_address: String::new(),
        }
    }
}

impl<C> ConnectStore<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn client(&self) -> Option<&C> {
        self.client.as_ref()
    }

    /// Moves the client out, leaving the connected flag and address untouched.
    pub fn take_client(&mut self) -> Option<C> {
        self.client.take()
    }

    pub fn rpc_address(&self) -> &str {
        &self.rpc_address
    }
}

impl<C> ConnectState<C> for ConnectStore<C> {
    fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    fn set_client(&mut self, client: C) {
        self.client = Some(client);
    }

    fn set_rpc_address(&mut self, address: String) {
        self.rpc_address = address;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;

    #[assay]
    fn starts_disconnected() {
        let store = ConnectStore::<u8>::new();

        assert!(!store.is_connected());
        assert!(store.client().is_none());
        assert!(store.rpc_address().is_empty());
    }

    #[assay]
    fn take_client_keeps_the_rest() {
        let mut store = ConnectStore::new();
        store.set_connected(true);
        store.set_client(7u8);
        store.set_rpc_address("http://localhost:26657".to_string());

        assert_eq!(store.take_client(), Some(7));
        assert!(store.client().is_none());
        assert!(store.is_connected());
        assert_eq!(store.rpc_address(), "http://localhost:26657");
    }
}
