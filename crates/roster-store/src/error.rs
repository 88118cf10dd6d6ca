use thiserror::Error;

/// Store failures, split so callers can tell a dead store from a hiccup.
///
/// An empty partition is not an error: reading a dataset that was never
/// cleaned yields `Ok` with no records.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("transient store failure: {0}")]
    Transient(String),
}
