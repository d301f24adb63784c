/// An established channel to a remote endpoint, created by a dialer.
///
/// Handles are opaque to the pool: the only thing it ever does with one,
/// besides lending it out, is closing it once during teardown.
pub trait Connection: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Releases the handle. May block until any network teardown is done.
    fn close(self) -> std::result::Result<(), Self::Error>;
}
