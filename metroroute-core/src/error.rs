use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown station: {0}")]
    UnknownStation(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
