//! Merging of release-note fragments.
//!
//! A fragment is a small Markdown document destined to be merged into a
//! final document. Fragments are concatenated in path order, headings left
//! without content are dropped, and link reference definitions are pooled.
//!
//! If the text of a heading begins with '+', it does not have to match an
//! existing heading. A fragment must begin with a non-empty matching heading.

pub mod check;
pub mod error;
pub mod merge;
pub mod package;
pub mod prune;
pub mod text;
pub mod tree;

pub use check::{check_document, check_fragment, heading_text_must_match};
pub use error::{CheckError, MergeError};
pub use merge::{MergeOptions, Merger, merge};
pub use prune::remove_empty_sections;
pub use tree::{DirTree, FragmentTree, MemTree, sorted_markdown_filenames};
