pub mod block;
pub mod document;
pub mod parser;
pub mod position;

pub use block::inline::Inline;
pub use block::{
    Block, CodeBlock, Empty, Heading, HtmlBlock, Item, List, Paragraph, Quote, Text,
    ThematicBreak,
};
pub use document::{Document, Link};
pub use parser::{ParseOptions, Parser};
pub use position::{LineIndex, Position};
