use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    HtmlParse(String),
    IoError(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            ScraperError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl Error for ScraperError {}
