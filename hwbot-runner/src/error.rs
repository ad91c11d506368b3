//! Poll iteration errors
//!
//! Every failure of a single iteration is one of six kinds. None of them is
//! fatal: the poller reports it and waits for the next tick.

use hwbot_client::ClientError;
use hwbot_core::ResponseError;
use thiserror::Error;

/// Failure of one fetch → validate → parse pass
#[derive(Debug, Error)]
pub enum PollError {
    /// The review API could not be queried or answered badly
    #[error(transparent)]
    Fetch(#[from] ClientError),

    /// The response was received but cannot be turned into a message
    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// Kind of an iteration failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollErrorKind {
    Transport,
    UnexpectedStatus,
    Decode,
    Schema,
    NoSubmissions,
    UnknownStatus,
}

impl PollError {
    pub fn kind(&self) -> PollErrorKind {
        match self {
            Self::Fetch(ClientError::Transport(_)) => PollErrorKind::Transport,
            Self::Fetch(ClientError::UnexpectedStatus { .. }) => PollErrorKind::UnexpectedStatus,
            Self::Fetch(ClientError::Decode(_)) => PollErrorKind::Decode,
            Self::Response(ResponseError::Schema(_)) => PollErrorKind::Schema,
            Self::Response(ResponseError::NoSubmissions) => PollErrorKind::NoSubmissions,
            Self::Response(ResponseError::UnknownStatus(_)) => PollErrorKind::UnknownStatus,
        }
    }
}
