use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The dataset could not be parsed (malformed CSV, mismatched columns).
    LoaderError(String),
    /// A record is missing a column the engine ranks or reports on.
    MissingColumn(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LoaderError(msg) => write!(f, "Loader Error: {}", msg),
            Error::MissingColumn(column) => write!(f, "Missing Column: {}", column),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::LoaderError(err.to_string())
    }
}
