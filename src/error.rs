use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ErrorType {
    InputError,
    LogicError,
    IoError,
    NetworkError,
    /// The planning service answered with a non-success HTTP status.
    ServiceError(u16),
    FormatError,
}

#[derive(Debug, Clone, Serialize)]
pub struct Error {
    #[serde(flatten)]
    type_: ErrorType,
    msg: String,
}

impl Error {
    pub fn new(type_: ErrorType, msg: String) -> Self {
        Error { type_, msg }
    }

    pub fn new_s(type_: ErrorType, msg: &str) -> Self {
        Error {
            type_,
            msg: msg.into(),
        }
    }

    pub fn get_type(&self) -> ErrorType {
        self.type_
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.type_, self.msg)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::new(ErrorType::IoError, value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        let error_type = match value.classify() {
            serde_json::error::Category::Io => ErrorType::IoError,
            _ => ErrorType::FormatError,
        };
        Error::new(error_type, value.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        let error_type = if value.is_decode() {
            ErrorType::FormatError
        } else {
            ErrorType::NetworkError
        };
        Error::new(error_type, value.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(value: url::ParseError) -> Self {
        Error::new(ErrorType::InputError, value.to_string())
    }
}
