use std::error::Error;
use std::fmt;

/// Anything that stops a container from being rebuilt.
#[derive(Debug)]
pub enum RenderError {
    Network(String),
    Status(u16),
    Read(String),
    BadEndpoint(String),
    JsonParse(String),
    NotAnArray,
    MalformedItem(usize),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Network(msg) => write!(f, "Network error: {msg}"),
            RenderError::Status(code) => write!(f, "Unexpected HTTP status {code}"),
            RenderError::Read(msg) => write!(f, "Read error: {msg}"),
            RenderError::BadEndpoint(msg) => write!(f, "Bad endpoint: {msg}"),
            RenderError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            RenderError::NotAnArray => write!(f, "Expected a JSON array of listings"),
            RenderError::MalformedItem(index) => {
                write!(f, "Listing at index {index} is not a JSON object")
            }
        }
    }
}

impl Error for RenderError {}
