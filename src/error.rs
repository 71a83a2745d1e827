use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Surface for backend failures (declined charge, gateway outage).
    /// No built-in provider produces one.
    #[error("Provider error: {0}")]
    ProviderError(String),
}
