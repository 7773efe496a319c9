use mdoc::block::inline::plain_text;
use mdoc::{Block, Item};

/// All the text in a block, without any formatting.
///
/// Nested blocks contribute their text followed by a newline each.
pub fn text(block: &Block) -> String {
    match block {
        Block::Heading(h) => plain_text(&h.text.inline),
        Block::Paragraph(p) => plain_text(&p.text.inline),
        Block::Text(t) => plain_text(&t.inline),
        Block::CodeBlock(c) => c.lines.join("\n"),
        Block::HtmlBlock(h) => h.lines.join("\n"),
        Block::List(l) => items_text(&l.items),
        Block::Quote(q) => blocks_text(&q.blocks),
        Block::ThematicBreak(_) | Block::Empty(_) => String::new(),
    }
}

/// All the text in a slice of blocks.
pub fn blocks_text(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(&text(block));
        out.push('\n');
    }
    out
}

fn items_text(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&blocks_text(&item.blocks));
        out.push('\n');
    }
    out
}
