use std::path::PathBuf;

use thiserror::Error;

/// Problems found in a single release-note fragment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CheckError {
    #[error("empty content")]
    EmptyContent,

    #[error("does not start with a heading")]
    MissingLeadingHeading { line: usize },

    #[error("starts with an empty heading")]
    EmptyHeadingText { line: usize },

    #[error("starts with a non-matching heading (text begins with a '+')")]
    NonMatchingLeadingHeading { heading: String, line: usize },

    #[error("section with heading {heading:?} needs a TODO or a sentence")]
    IncompleteSection { heading: String, line: usize },
}

impl CheckError {
    /// The 1-based source line the problem was found on, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            CheckError::EmptyContent => None,
            CheckError::MissingLeadingHeading { line }
            | CheckError::EmptyHeadingText { line }
            | CheckError::NonMatchingLeadingHeading { line, .. }
            | CheckError::IncompleteSection { line, .. } => Some(*line),
        }
    }
}

/// Failures while merging a tree of fragments. Any of these aborts the merge.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("duplicate link reference {key:?}; second in {filename}")]
    DuplicateLinkReference { key: String, filename: String },
}
