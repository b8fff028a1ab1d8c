use std::{error::Error, fmt::Display};

use crate::store::StoreError;

#[derive(Debug)]
pub enum ViewError {
    /// An element the operation needs is not on the page. Nothing was
    /// changed.
    MissingElement(String),
    /// A nav link or select value that names no known tab.
    UnknownTab(String),
    Store(StoreError),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::MissingElement(id) => write!(f, "No element with id '{id}' on the page"),
            ViewError::UnknownTab(label) => write!(f, "Unknown content tab '{label}'"),
            ViewError::Store(error) => write!(f, "Store: {error}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ViewError::Store(error) => Some(error),
            _ => None,
        }
    }
}

impl From<StoreError> for ViewError {
    fn from(error: StoreError) -> Self {
        ViewError::Store(error)
    }
}
