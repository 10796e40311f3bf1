use thiserror::Error;

/// Errors reported when a [`Heap`](crate::Heap) cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A required constructor argument was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// A `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
