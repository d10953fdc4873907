//! Error types for blinkpage

use std::fmt;
use thiserror::Error;

/// The main error type for page-engine operations
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Page corruption detected
    #[error("Corruption detected: {details}")]
    Corruption {
        /// Description of the corruption
        details: String,
        /// Page where corruption was detected
        page_id: Option<PageId>,
    },

    /// Invalid operation attempted
    #[error("Invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

/// Page identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(pub u64);

impl PageId {
    /// Whether this id is the null page reference
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    /// Branch page (internal node)
    Branch,
    /// Leaf page (contains keys at level 0)
    Leaf,
    /// Root page
    Root,
    /// Uninitialized page
    Free,
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageType::Branch => write!(f, "branch"),
            PageType::Leaf => write!(f, "leaf"),
            PageType::Root => write!(f, "root"),
            PageType::Free => write!(f, "free"),
        }
    }
}

/// Result type alias for page-engine operations
pub type Result<T> = std::result::Result<T, Error>;
