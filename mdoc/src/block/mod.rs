pub mod inline;

use crate::block::inline::Inline;
use crate::position::Position;

/// A block-level node of a parsed document.
///
/// Every variant carries the source lines it was parsed from. Nested blocks
/// (quote children, list items) carry their own positions, but shifting a
/// block with [`Block::add_lines`] only moves the block's own record.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    /// A bare run of inline content, as found in tight list items.
    Text(Text),
    List(List),
    CodeBlock(CodeBlock),
    HtmlBlock(HtmlBlock),
    Quote(Quote),
    ThematicBreak(ThematicBreak),
    /// A blank placeholder; carries a position but no content.
    Empty(Empty),
}

/// A run of inline content with its source lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Position,
    pub inline: Vec<Inline>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub position: Position,
    /// 1 through 6.
    pub level: u8,
    /// Explicit `{#id}` attribute, when heading IDs are enabled.
    pub id: Option<String>,
    pub text: Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub position: Position,
    pub text: Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub position: Position,
    /// Start number of an ordered list; `None` for bullet lists.
    pub start: Option<u64>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub position: Position,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub position: Position,
    /// Info string of a fenced block, empty for indented blocks.
    pub info: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlBlock {
    pub position: Position,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub position: Position,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThematicBreak {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Empty {
    pub position: Position,
}

impl Block {
    pub fn position(&self) -> Position {
        match self {
            Block::Heading(b) => b.position,
            Block::Paragraph(b) => b.position,
            Block::Text(b) => b.position,
            Block::List(b) => b.position,
            Block::CodeBlock(b) => b.position,
            Block::HtmlBlock(b) => b.position,
            Block::Quote(b) => b.position,
            Block::ThematicBreak(b) => b.position,
            Block::Empty(b) => b.position,
        }
    }

    pub fn position_mut(&mut self) -> &mut Position {
        match self {
            Block::Heading(b) => &mut b.position,
            Block::Paragraph(b) => &mut b.position,
            Block::Text(b) => &mut b.position,
            Block::List(b) => &mut b.position,
            Block::CodeBlock(b) => &mut b.position,
            Block::HtmlBlock(b) => &mut b.position,
            Block::Quote(b) => &mut b.position,
            Block::ThematicBreak(b) => &mut b.position,
            Block::Empty(b) => &mut b.position,
        }
    }

    /// Add `n` lines to this block's position. `n` may be negative.
    pub fn add_lines(&mut self, n: isize) {
        self.position_mut().shift(n);
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }

    pub fn is_empty_marker(&self) -> bool {
        matches!(self, Block::Empty(_))
    }

    /// Short lowercase name of the block kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading(_) => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::Text(_) => "text",
            Block::List(_) => "list",
            Block::CodeBlock(_) => "code",
            Block::HtmlBlock(_) => "html",
            Block::Quote(_) => "quote",
            Block::ThematicBreak(_) => "break",
            Block::Empty(_) => "empty",
        }
    }
}

impl Heading {
    /// Plain text of the heading title.
    pub fn title(&self) -> String {
        inline::plain_text(&self.text.inline)
    }
}
