use mdoc::{Block, Document, ParseOptions, Parser};

use crate::error::CheckError;
use crate::text::text;

/// Reports problems in a release-note fragment.
///
/// A fragment must begin with a non-empty matching heading, and every
/// section must contain either a TODO or at least one sentence.
pub fn check_fragment(data: &str) -> Result<(), CheckError> {
    let doc = Parser::new(ParseOptions::default()).parse(data);
    check_document(&doc)
}

/// Same as [`check_fragment`] for an already parsed fragment.
pub fn check_document(doc: &Document) -> Result<(), CheckError> {
    let Some(first) = doc.blocks.first() else {
        return Err(CheckError::EmptyContent);
    };
    let Block::Heading(heading) = first else {
        return Err(CheckError::MissingLeadingHeading {
            line: first.position().start_line,
        });
    };
    let htext = heading.title();
    if htext.trim().is_empty() {
        return Err(CheckError::EmptyHeadingText {
            line: heading.position.start_line,
        });
    }
    if !heading_text_must_match(&htext) {
        return Err(CheckError::NonMatchingLeadingHeading {
            heading: htext,
            line: heading.position.start_line,
        });
    }

    // The heading beginning the current section, and whether that section
    // has shown a TODO or a sentence yet.
    let mut cur = first;
    let mut found = false;
    for block in &doc.blocks[1..] {
        if block.is_heading() {
            if !found {
                break;
            }
            cur = block;
            found = false;
        } else {
            // Standard end-of-sentence punctuation stands in for a sentence.
            let t = text(block);
            found |= t.contains("TODO") || t.contains(['.', '?', '!']);
        }
    }
    if !found {
        return Err(CheckError::IncompleteSection {
            heading: text(cur),
            line: cur.position().start_line,
        });
    }
    Ok(())
}

/// Reports whether `s` is the text of a heading that must be matched against
/// another heading. Headings beginning with '+' don't require a match.
pub fn heading_text_must_match(s: &str) -> bool {
    !s.starts_with('+')
}
