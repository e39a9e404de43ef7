/// Rewrites an `http`/`https` RPC address to its `ws`/`wss` equivalent.
///
/// Addresses with any other scheme (including ones that are already
/// websocket addresses) are returned unchanged, so applying this twice is
/// the same as applying it once.
pub fn websocket_address(address: &str) -> String {
    if let Some(rest) = address.strip_prefix("https://") {
        return format!("wss://{}", rest);
    }
    if let Some(rest) = address.strip_prefix("http://") {
        return format!("ws://{}", rest);
    }

    address.to_string()
}
