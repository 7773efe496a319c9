use std::io::{self, Write};

use mdoc::{Block, Document};

const SUMMARY_WIDTH: usize = 60;

/// Write one line per top-level block (lines, kind, text summary), followed
/// by the link reference definitions.
pub fn write_outline(out: &mut impl Write, doc: &Document) -> io::Result<()> {
    for block in &doc.blocks {
        let summary = match block {
            Block::Heading(h) => format!("{} {}", "#".repeat(h.level as usize), h.title()),
            other => relnote::text::text(other),
        };
        writeln!(
            out,
            "{:>9}  {:<9} {}",
            block.position().to_string(),
            block.kind(),
            shorten(&summary)
        )?;
    }
    for (key, link) in &doc.links {
        writeln!(out, "[{}]: {}", key, link.url)?;
    }
    Ok(())
}

/// First line of `s`, cut to the summary width.
fn shorten(s: &str) -> String {
    let line = s.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let mut chars = line.chars();
    let mut short: String = chars.by_ref().take(SUMMARY_WIDTH).collect();
    if chars.next().is_some() {
        short.push_str("...");
    }
    short
}
