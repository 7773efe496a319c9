use mdoc::{Block, Position};
use pretty_assertions::assert_eq;
use relnote::remove_empty_sections;

fn parse(source: &str) -> Vec<Block> {
    mdoc::Parser::default().parse(source).blocks
}

/// (kind or heading title, start line, end line) per block.
fn summary(blocks: &[Block]) -> Vec<(String, usize, usize)> {
    blocks
        .iter()
        .map(|b| {
            let label = match b {
                Block::Heading(h) => format!("{} {}", "#".repeat(h.level as usize), h.title()),
                other => other.kind().to_string(),
            };
            (label, b.position().start_line, b.position().end_line)
        })
        .collect()
}

fn assert_monotonic(blocks: &[Block]) {
    for pair in blocks.windows(2) {
        assert!(
            pair[0].position().end_line <= pair[1].position().start_line,
            "positions out of order: {:?} then {:?}",
            pair[0].position(),
            pair[1].position()
        );
    }
}

#[test]
fn drops_empty_section_and_shifts_followers() {
    let pruned = remove_empty_sections(parse("# Foo\n\n# Bar\n\ntext\n"));
    assert_eq!(
        summary(&pruned),
        [("# Bar".to_string(), 1, 1), ("paragraph".to_string(), 3, 3)]
    );
}

#[test]
fn keeps_parent_of_nonempty_subsection() {
    let source = "# Tools\n\n## Go command\n\nA change.\n";
    let pruned = remove_empty_sections(parse(source));
    assert_eq!(
        summary(&pruned),
        [
            ("# Tools".to_string(), 1, 1),
            ("## Go command".to_string(), 3, 3),
            ("paragraph".to_string(), 5, 5),
        ]
    );
}

#[test]
fn drops_nested_empty_headings_before_shallower_heading() {
    let source = "# A\n\nBody.\n\n## B\n\n### C\n\n# D\n\nMore.\n";
    let pruned = remove_empty_sections(parse(source));
    assert_eq!(
        summary(&pruned),
        [
            ("# A".to_string(), 1, 1),
            ("paragraph".to_string(), 3, 3),
            ("# D".to_string(), 5, 5),
            ("paragraph".to_string(), 7, 7),
        ]
    );
}

#[test]
fn keeps_shallower_heading_before_deeper_one() {
    // "## B" is followed by a deeper heading with content, so it stays.
    let source = "## B\n\n### C\n\nText.\n";
    let pruned = remove_empty_sections(parse(source));
    assert_eq!(pruned.len(), 3);
}

#[test]
fn drops_trailing_empty_headings_at_any_level() {
    let source = "# A\n\nBody.\n\n## B\n\n### C\n";
    let pruned = remove_empty_sections(parse(source));
    assert_eq!(
        summary(&pruned),
        [("# A".to_string(), 1, 1), ("paragraph".to_string(), 3, 3)]
    );
}

#[test]
fn all_empty_headings_leave_nothing() {
    assert!(remove_empty_sections(parse("# A\n\n## B\n\n# C\n")).is_empty());
    assert!(remove_empty_sections(Vec::new()).is_empty());
}

#[test]
fn removed_span_counts_multiline_headings() {
    // A setext heading covers two lines; removing it moves followers by 3.
    let source = "Empty\n=====\n\n# Next\n\nText.\n";
    let pruned = remove_empty_sections(parse(source));
    assert_eq!(
        summary(&pruned),
        [("# Next".to_string(), 1, 1), ("paragraph".to_string(), 3, 3)]
    );
}

#[test]
fn pruning_is_idempotent_and_monotonic() {
    let sources = [
        "# Foo\n\n# Bar\n\ntext\n",
        "# A\n\nBody.\n\n## B\n\n### C\n\n# D\n\nMore.\n",
        "## x\n\n# y\n\n- a\n- b\n\n### z\n\n```\ncode\n```\n\n# w\n",
        "Intro.\n\n# H\n\n## H2\n",
    ];
    for source in sources {
        let once = remove_empty_sections(parse(source));
        assert_monotonic(&once);
        let twice = remove_empty_sections(once.clone());
        assert_eq!(once, twice, "not idempotent for {:?}", source);
    }
}

#[test]
fn non_heading_blocks_are_never_removed() {
    let blocks = parse("Intro.\n\n- a\n\n> q.\n");
    let pruned = remove_empty_sections(blocks.clone());
    assert_eq!(pruned, blocks);
    assert_eq!(pruned[0].position(), Position::line(1));
}
