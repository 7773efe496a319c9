use std::ops::Range;

use pulldown_cmark::{
    CodeBlockKind, Event, HeadingLevel, Options, Parser as CmarkParser, Tag, TagEnd,
};

use crate::block::inline::Inline;
use crate::block::{
    Block, CodeBlock, Empty, Heading, HtmlBlock, Item, List, Paragraph, Quote, Text,
    ThematicBreak,
};
use crate::document::{Document, Link, normalize_link_key};
use crate::parser::ParseOptions;
use crate::position::{LineIndex, Position};

type Spanned<'a> = (Event<'a>, Range<usize>);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse Markdown source text into a document of positioned blocks.
pub fn parse_document(source: &str, options: ParseOptions) -> Document {
    let mut cmark_options = Options::empty();
    if options.heading_ids {
        cmark_options |= Options::ENABLE_HEADING_ATTRIBUTES;
    }
    if options.strikethrough {
        cmark_options |= Options::ENABLE_STRIKETHROUGH;
    }

    let mut iter = CmarkParser::new_ext(source, cmark_options).into_offset_iter();
    let events: Vec<Spanned<'_>> = iter.by_ref().collect();
    let defs = iter.reference_definitions();
    let links = defs
        .iter()
        .map(|(key, def)| {
            let link = Link {
                url: def.dest.to_string(),
                title: def.title.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            };
            (normalize_link_key(key), link)
        })
        .collect();

    let state = ParseState {
        lines: LineIndex::new(source),
    };
    let mut i = 0;
    let mut blocks = state.collect_blocks(&events, &mut i, &|_| false);
    let def_positions = defs
        .iter()
        .map(|(_, def)| state.lines.position(&def.span))
        .collect();
    insert_definition_markers(&mut blocks, def_positions);
    Document { blocks, links }
}

/// pulldown-cmark emits no events for link reference definitions. Each run of
/// top-level definitions on consecutive lines stands in for a paragraph, so
/// it becomes an `Empty` block in document order. Definitions nested in a
/// quote or list item lie inside that block's lines and are left alone.
fn insert_definition_markers(blocks: &mut Vec<Block>, mut defs: Vec<Position>) {
    defs.sort_by_key(|p| p.start_line);

    let mut runs: Vec<Position> = Vec::new();
    for def in defs {
        match runs.last_mut() {
            Some(run) if def.start_line <= run.end_line + 1 => {
                run.end_line = run.end_line.max(def.end_line);
            }
            _ => runs.push(def),
        }
    }

    for position in runs {
        let covered = blocks.iter().any(|b| {
            let p = b.position();
            p.start_line <= position.start_line && position.start_line <= p.end_line
        });
        if covered {
            continue;
        }
        let at = blocks.partition_point(|b| b.position().start_line < position.start_line);
        blocks.insert(at, Block::Empty(Empty { position }));
    }
}

// ---------------------------------------------------------------------------
// Parse state
// ---------------------------------------------------------------------------

struct ParseState<'a> {
    lines: LineIndex<'a>,
}

impl ParseState<'_> {
    /// Collect blocks until an End tag accepted by `is_end` (consumed), or
    /// the end of the event stream.
    fn collect_blocks(
        &self,
        events: &[Spanned<'_>],
        i: &mut usize,
        is_end: &dyn Fn(&TagEnd) -> bool,
    ) -> Vec<Block> {
        let mut blocks = Vec::new();

        while *i < events.len() {
            let (ref ev, ref range) = events[*i];

            match ev {
                Event::End(tag_end) if is_end(tag_end) => {
                    *i += 1;
                    break;
                }

                Event::Start(Tag::Heading { level, id, .. }) => {
                    let position = self.lines.position(range);
                    let level = heading_level_to_u8(level);
                    let id = id.as_ref().map(|id| id.to_string());
                    *i += 1;
                    let inline =
                        self.collect_inlines(events, i, &|e| matches!(e, TagEnd::Heading(_)));
                    blocks.push(Block::Heading(Heading {
                        position,
                        level,
                        id,
                        text: Text { position, inline },
                    }));
                }

                Event::Start(Tag::Paragraph) => {
                    let position = self.lines.position(range);
                    *i += 1;
                    let inline =
                        self.collect_inlines(events, i, &|e| matches!(e, TagEnd::Paragraph));
                    blocks.push(Block::Paragraph(Paragraph {
                        position,
                        text: Text { position, inline },
                    }));
                }

                Event::Start(Tag::BlockQuote(_)) => {
                    let position = self.lines.position(range);
                    *i += 1;
                    let children =
                        self.collect_blocks(events, i, &|e| matches!(e, TagEnd::BlockQuote(_)));
                    blocks.push(Block::Quote(Quote {
                        position,
                        blocks: children,
                    }));
                }

                Event::Start(Tag::CodeBlock(kind)) => {
                    let position = self.lines.position(range);
                    let info = match kind {
                        CodeBlockKind::Fenced(info) => info.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    *i += 1;
                    let content = collect_text_until(events, i, |e| matches!(e, TagEnd::CodeBlock));
                    blocks.push(Block::CodeBlock(CodeBlock {
                        position,
                        info,
                        lines: split_lines(&content),
                    }));
                }

                Event::Start(Tag::HtmlBlock) => {
                    let position = self.lines.position(range);
                    *i += 1;
                    let content = collect_text_until(events, i, |e| matches!(e, TagEnd::HtmlBlock));
                    blocks.push(Block::HtmlBlock(HtmlBlock {
                        position,
                        lines: split_lines(&content),
                    }));
                }

                Event::Start(Tag::List(start)) => {
                    let position = self.lines.position(range);
                    let start = *start;
                    *i += 1;
                    let items = self.collect_items(events, i);
                    blocks.push(Block::List(List {
                        position,
                        start,
                        items,
                    }));
                }

                Event::Rule => {
                    blocks.push(Block::ThematicBreak(ThematicBreak {
                        position: self.lines.position(range),
                    }));
                    *i += 1;
                }

                // Inline content outside a paragraph: tight list items.
                _ if starts_inline(ev) => {
                    let start = range.start;
                    let (inline, end) = self.collect_inline_run(events, i);
                    blocks.push(Block::Text(Text {
                        position: self.lines.position(&(start..end)),
                        inline,
                    }));
                }

                // Containers not enabled in the parser options (tables,
                // footnotes, metadata) carry nothing we model.
                Event::Start(_) => skip_container(events, i),

                _ => {
                    *i += 1;
                }
            }
        }

        blocks
    }

    /// Collect list items until End(List).
    fn collect_items(&self, events: &[Spanned<'_>], i: &mut usize) -> Vec<Item> {
        let mut items = Vec::new();

        while *i < events.len() {
            let (ref ev, ref range) = events[*i];
            match ev {
                Event::End(TagEnd::List(_)) => {
                    *i += 1;
                    break;
                }
                Event::Start(Tag::Item) => {
                    let position = self.lines.position(range);
                    *i += 1;
                    let mut blocks = self.collect_blocks(events, i, &|e| matches!(e, TagEnd::Item));
                    if blocks.is_empty() {
                        blocks.push(Block::Empty(Empty { position }));
                    }
                    items.push(Item { position, blocks });
                }
                _ => {
                    *i += 1;
                }
            }
        }

        items
    }

    /// Collect consecutive inline events, returning them with the byte offset
    /// where the run ends.
    fn collect_inline_run(&self, events: &[Spanned<'_>], i: &mut usize) -> (Vec<Inline>, usize) {
        let mut inlines = Vec::new();
        let mut end = 0;
        while *i < events.len() && starts_inline(&events[*i].0) {
            end = end.max(events[*i].1.end);
            self.parse_inline(events, i, &mut inlines);
        }
        (inlines, end)
    }

    /// Collect inline nodes until a matching End tag.
    fn collect_inlines(
        &self,
        events: &[Spanned<'_>],
        i: &mut usize,
        is_end: &dyn Fn(&TagEnd) -> bool,
    ) -> Vec<Inline> {
        let mut inlines = Vec::new();

        while *i < events.len() {
            if let Event::End(tag_end) = &events[*i].0 {
                if is_end(tag_end) {
                    *i += 1;
                    break;
                }
            }
            self.parse_inline(events, i, &mut inlines);
        }

        inlines
    }

    /// Parse one inline node (and everything nested in it) into `out`.
    fn parse_inline(&self, events: &[Spanned<'_>], i: &mut usize, out: &mut Vec<Inline>) {
        let (ref ev, _) = events[*i];
        *i += 1;

        match ev {
            Event::Text(s) | Event::InlineMath(s) | Event::DisplayMath(s) => push_plain(out, s),
            Event::Code(s) => out.push(Inline::Code(s.to_string())),
            Event::InlineHtml(s) | Event::Html(s) => out.push(Inline::Html(s.to_string())),
            Event::SoftBreak => out.push(Inline::SoftBreak),
            Event::HardBreak => out.push(Inline::HardBreak),
            Event::Start(Tag::Strong) => {
                let inner = self.collect_inlines(events, i, &|e| matches!(e, TagEnd::Strong));
                out.push(Inline::Strong(inner));
            }
            Event::Start(Tag::Emphasis) => {
                let inner = self.collect_inlines(events, i, &|e| matches!(e, TagEnd::Emphasis));
                out.push(Inline::Emphasis(inner));
            }
            Event::Start(Tag::Strikethrough) => {
                let inner =
                    self.collect_inlines(events, i, &|e| matches!(e, TagEnd::Strikethrough));
                out.push(Inline::Strikethrough(inner));
            }
            Event::Start(Tag::Link {
                dest_url, title, ..
            }) => {
                let url = dest_url.to_string();
                let title = title.to_string();
                let inner = self.collect_inlines(events, i, &|e| matches!(e, TagEnd::Link));
                out.push(Inline::Link { url, title, inner });
            }
            Event::Start(Tag::Image {
                dest_url, title, ..
            }) => {
                let url = dest_url.to_string();
                let title = title.to_string();
                let alt = self.collect_inlines(events, i, &|e| matches!(e, TagEnd::Image));
                out.push(Inline::Image { url, title, alt });
            }
            // Any other container: keep its content, drop the wrapper. Nested
            // containers consume their own ends, so the next End is ours.
            Event::Start(_) => {
                let inner = self.collect_inlines(events, i, &|_| true);
                out.extend(inner);
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn heading_level_to_u8(level: &HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn starts_inline(ev: &Event<'_>) -> bool {
    matches!(
        ev,
        Event::Text(_)
            | Event::Code(_)
            | Event::InlineHtml(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_)
            | Event::SoftBreak
            | Event::HardBreak
            | Event::Start(
                Tag::Emphasis
                    | Tag::Strong
                    | Tag::Strikethrough
                    | Tag::Link { .. }
                    | Tag::Image { .. }
            )
    )
}

/// pulldown-cmark splits text at entity and escape boundaries; glue the
/// pieces back together.
fn push_plain(out: &mut Vec<Inline>, s: &str) {
    if let Some(Inline::Plain(prev)) = out.last_mut() {
        prev.push_str(s);
    } else {
        out.push(Inline::Plain(s.to_string()));
    }
}

/// Collect all literal text content until a matching End tag.
fn collect_text_until(
    events: &[Spanned<'_>],
    i: &mut usize,
    is_end: impl Fn(&TagEnd) -> bool,
) -> String {
    let mut text = String::new();
    while *i < events.len() {
        let (ref ev, _) = events[*i];
        match ev {
            Event::End(tag_end) if is_end(tag_end) => {
                *i += 1;
                break;
            }
            Event::Text(s) | Event::Html(s) => {
                text.push_str(s);
                *i += 1;
            }
            _ => {
                *i += 1;
            }
        }
    }
    text
}

/// Skip a container we do not model, including everything nested in it.
fn skip_container(events: &[Spanned<'_>], i: &mut usize) {
    let mut depth = 0usize;
    while *i < events.len() {
        match events[*i].0 {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    *i += 1;
                    return;
                }
            }
            _ => {}
        }
        *i += 1;
    }
}

/// Split block content into lines, dropping the final line terminator.
fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    content
        .strip_suffix('\n')
        .unwrap_or(content)
        .split('\n')
        .map(str::to_string)
        .collect()
}
