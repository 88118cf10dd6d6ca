use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row source exhausted after {attempts} attempt(s): {last}")]
    Exhausted { attempts: u32, last: String },
}
