mod structural;

use crate::document::Document;

/// Parser configuration, passed explicitly to every [`Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Recognize explicit heading IDs (`# Title {#id}`).
    pub heading_ids: bool,
    /// Recognize `~~strikethrough~~` spans.
    pub strikethrough: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            heading_ids: true,
            strikethrough: true,
        }
    }
}

/// Parser entry point.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Parser { options }
    }

    /// Parse Markdown source into a Document. Every input is valid
    /// CommonMark, so this cannot fail.
    pub fn parse(&self, source: &str) -> Document {
        structural::parse_document(source, self.options)
    }
}
