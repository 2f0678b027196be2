use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsensusError {
    #[error("index {index} is not among the attestor's assigned indexes")]
    IndexMismatch { index: u8 },

    #[error("no open session for this request")]
    SessionNotOpen,

    #[error("attestor {0} already submitted this response")]
    DuplicateResponse(String),
}
