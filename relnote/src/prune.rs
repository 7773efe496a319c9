use mdoc::Block;

/// Removes headings with no content.
///
/// A heading has no content if there are no non-heading blocks between it
/// and the next heading at the same or a higher level, or the end of the
/// document. Blocks after a removed heading move up by the lines it took,
/// plus one for the blank line that separated it from what followed.
pub fn remove_empty_sections(blocks: Vec<Block>) -> Vec<Block> {
    let mut res: Vec<Block> = Vec::with_capacity(blocks.len());
    // Number of lines by which to move subsequent blocks up.
    let mut delta = 0usize;

    for mut block in blocks {
        if let Block::Heading(h) = &block {
            pop_empty_headings(&mut res, h.level, &mut delta);
        }
        block.add_lines(-(delta as isize));
        res.push(block);
    }
    // Level 1 catches every heading left dangling at the end.
    pop_empty_headings(&mut res, 1, &mut delta);
    res
}

/// Pop trailing headings at `level` or deeper; nothing but headings follows
/// them, so they are empty.
fn pop_empty_headings(res: &mut Vec<Block>, level: u8, delta: &mut usize) {
    while let Some(Block::Heading(last)) = res.last() {
        if last.level < level {
            break;
        }
        log::trace!("removing empty heading {:?}", last.title());
        *delta += last.position.span() + 2;
        res.pop();
    }
}
