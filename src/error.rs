use thiserror::Error;

/// Failures surfaced by the cross-thread envelope handle.
///
/// Rendering and parameter access never fail; only pushing a message to an
/// envelope living on another thread can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The message queue is full; the audio thread has not drained it yet.
    #[error("envelope message queue is full")]
    QueueFull,
    /// The envelope on the other side was disposed or dropped.
    #[error("envelope has been disposed")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, Error>;
