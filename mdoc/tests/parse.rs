use mdoc::{Block, Inline, ParseOptions, Parser, Position};
use pretty_assertions::assert_eq;

fn parse(source: &str) -> mdoc::Document {
    Parser::new(ParseOptions::default()).parse(source)
}

fn positions(doc: &mdoc::Document) -> Vec<(usize, usize)> {
    doc.blocks
        .iter()
        .map(|b| (b.position().start_line, b.position().end_line))
        .collect()
}

#[test]
fn empty_source_has_no_blocks() {
    let doc = parse("");
    assert!(doc.blocks.is_empty());
    assert!(doc.links.is_empty());

    assert!(parse("\n\n  \n").blocks.is_empty());
}

#[test]
fn heading_and_paragraph_positions() {
    let doc = parse("# Title\nSome sentence.\n\n## Sub\n\nMore text\nover two lines.\n");
    let kinds: Vec<_> = doc.blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, ["heading", "paragraph", "heading", "paragraph"]);
    assert_eq!(positions(&doc), [(1, 1), (2, 2), (4, 4), (6, 7)]);
}

#[test]
fn heading_fields() {
    let doc = parse("### Minor *changes*\n");
    let Block::Heading(h) = &doc.blocks[0] else {
        panic!("expected heading, got {:?}", doc.blocks[0]);
    };
    assert_eq!(h.level, 3);
    assert_eq!(h.id, None);
    assert_eq!(h.title(), "Minor changes");
    assert_eq!(h.text.position, Position::line(1));
}

#[test]
fn heading_ids_follow_the_option() {
    let source = "## Go command {#go-command}\n";

    let doc = parse(source);
    let Block::Heading(h) = &doc.blocks[0] else {
        panic!("expected heading");
    };
    assert_eq!(h.id.as_deref(), Some("go-command"));
    assert_eq!(h.title(), "Go command");

    let options = ParseOptions {
        heading_ids: false,
        ..ParseOptions::default()
    };
    let doc = Parser::new(options).parse(source);
    let Block::Heading(h) = &doc.blocks[0] else {
        panic!("expected heading");
    };
    assert_eq!(h.id, None);
    assert_eq!(h.title(), "Go command {#go-command}");
}

#[test]
fn link_reference_definitions() {
    let doc = parse("# T\nSee [the issue][Issue 1].\n\n[Issue 1]: https://go.dev/issue/1 \"one\"\n");
    assert_eq!(doc.links.len(), 1);
    let link = &doc.links["issue 1"];
    assert_eq!(link.url, "https://go.dev/issue/1");
    assert_eq!(link.title, "one");

    let Block::Paragraph(p) = &doc.blocks[1] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        p.text.inline,
        vec![
            Inline::Plain("See ".into()),
            Inline::Link {
                url: "https://go.dev/issue/1".into(),
                title: "one".into(),
                inner: vec![Inline::Plain("the issue".into())],
            },
            Inline::Plain(".".into()),
        ]
    );
}

#[test]
fn tight_list_items_hold_text_runs() {
    let doc = parse("- one\n- two `x`\n");
    let Block::List(list) = &doc.blocks[0] else {
        panic!("expected list");
    };
    assert_eq!(list.start, None);
    assert_eq!(list.position, Position::new(1, 2));
    assert_eq!(list.items.len(), 2);
    assert_eq!(
        list.items[1].blocks,
        vec![Block::Text(mdoc::Text {
            position: Position::line(2),
            inline: vec![Inline::Plain("two ".into()), Inline::Code("x".into())],
        })]
    );
}

#[test]
fn loose_list_items_hold_paragraphs() {
    let doc = parse("1. first\n\n2. second\n");
    let Block::List(list) = &doc.blocks[0] else {
        panic!("expected list");
    };
    assert_eq!(list.start, Some(1));
    assert!(matches!(list.items[0].blocks[0], Block::Paragraph(_)));
}

#[test]
fn empty_list_item_holds_empty_marker() {
    let doc = parse("- a\n-\n");
    let Block::List(list) = &doc.blocks[0] else {
        panic!("expected list");
    };
    assert!(list.items[1].blocks[0].is_empty_marker());
}

#[test]
fn code_html_quote_and_break() {
    let source = "```go\nfunc f() {}\nvar x = 1\n```\n\n<div>\nhi\n</div>\n\n> quoted.\n\n---\n";
    let doc = parse(source);
    let kinds: Vec<_> = doc.blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, ["code", "html", "quote", "break"]);
    assert_eq!(positions(&doc), [(1, 4), (6, 8), (10, 10), (12, 12)]);

    let Block::CodeBlock(code) = &doc.blocks[0] else {
        panic!("expected code block");
    };
    assert_eq!(code.info, "go");
    assert_eq!(code.lines, ["func f() {}", "var x = 1"]);

    let Block::HtmlBlock(html) = &doc.blocks[1] else {
        panic!("expected html block");
    };
    assert_eq!(html.lines, ["<div>", "hi", "</div>"]);

    let Block::Quote(quote) = &doc.blocks[2] else {
        panic!("expected quote");
    };
    assert_eq!(quote.blocks.len(), 1);
}

#[test]
fn add_lines_moves_only_the_block_record() {
    let mut doc = parse("# A\n");
    doc.blocks[0].add_lines(5);
    assert_eq!(doc.blocks[0].position(), Position::line(6));
    doc.blocks[0].add_lines(-10);
    assert_eq!(doc.blocks[0].position(), Position::line(0));
    let Block::Heading(h) = &doc.blocks[0] else {
        panic!("expected heading");
    };
    assert_eq!(h.text.position, Position::line(1));
}

#[test]
fn definition_paragraphs_become_empty_blocks() {
    let source = "[a]: /a\n[b]: /b\n\n# T\n\nText.\n\n[c]: /c\n";
    let doc = parse(source);
    let kinds: Vec<_> = doc.blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, ["empty", "heading", "paragraph", "empty"]);
    assert_eq!(positions(&doc), [(1, 2), (4, 4), (6, 6), (8, 8)]);
    assert_eq!(doc.links.len(), 3);
}

#[test]
fn definitions_inside_quotes_stay_inside() {
    let doc = parse("> [a]: /a\n>\n> Quoted.\n");
    let kinds: Vec<_> = doc.blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, ["quote"]);
    assert_eq!(doc.links["a"].url, "/a");
}
