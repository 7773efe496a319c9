use relnote::text::{blocks_text, text};

fn blocks(source: &str) -> Vec<mdoc::Block> {
    mdoc::Parser::default().parse(source).blocks
}

#[test]
fn heading_and_paragraph_text_drop_formatting() {
    let bs = blocks("# The *go* `vet` command\n\nSee [the docs](/doc) **now**.\n");
    assert_eq!(text(&bs[0]), "The go vet command");
    assert_eq!(text(&bs[1]), "See the docs now.");
}

#[test]
fn soft_breaks_become_newlines() {
    let bs = blocks("one\ntwo\n");
    assert_eq!(text(&bs[0]), "one\ntwo");
}

#[test]
fn code_and_html_join_lines() {
    let bs = blocks("    a := 1\n    b := 2\n\n<p>\nx\n</p>\n");
    assert_eq!(text(&bs[0]), "a := 1\nb := 2");
    assert_eq!(text(&bs[1]), "<p>\nx\n</p>");
}

#[test]
fn lists_and_quotes_end_children_with_newlines() {
    let bs = blocks("- a\n- b\n");
    assert_eq!(text(&bs[0]), "a\n\nb\n\n");

    let bs = blocks("> one\n>\n> two\n");
    assert_eq!(text(&bs[0]), "one\ntwo\n");
}

#[test]
fn breaks_and_empty_blocks_have_no_text() {
    let bs = blocks("---\n");
    assert_eq!(text(&bs[0]), "");
    assert_eq!(blocks_text(&[]), "");
}
