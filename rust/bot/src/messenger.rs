use thiserror::Error;

/// Delivery failure for a single participant. The deal keeps going for the
/// other seats; the group reply names who could not be reached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("could not reach {participant}: {reason}")]
pub struct SendError {
    pub participant: String,
    pub reason: String,
}

/// Capability to whisper to one participant, injected per platform. The
/// engine never learns which transport sits behind it.
pub trait MessageSender {
    fn send_private(&self, participant: &str, text: &str) -> Result<(), SendError>;
}
