use mdoc::{Block, Heading, Inline, Position, Text};

/// Level of the synthetic heading inserted before a package's fragments.
pub const PACKAGE_HEADING_LEVEL: u8 = 4;

/// The standard library package a fragment path belongs to, if any.
///
/// A path names package P if it matches the glob "*stdlib/*minor/P/<file>":
/// the first segment ends in "stdlib", the second ends in "minor", and the
/// directory of the remainder is P.
pub fn stdlib_package(filename: &str) -> Option<String> {
    let (dir, rest) = filename.split_once('/')?;
    if !dir.ends_with("stdlib") {
        return None;
    }
    let (dir, rest) = rest.split_once('/')?;
    if !dir.ends_with("minor") {
        return None;
    }
    // A file directly in the minor directory has no package.
    let (pkg, _file) = rest.rsplit_once('/')?;
    clean_path(pkg)
}

/// Lexically clean a relative slash path: drop empty and "." segments and
/// fold ".." into its parent. `None` if nothing is left.
fn clean_path(path: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|&last| last != "..") {
                    parts.pop();
                } else {
                    parts.push("..");
                }
            }
            s => parts.push(s),
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// A level-4 heading linking to the documentation of `pkg`, placed two
/// lines after `last_line`.
pub fn stdlib_package_heading(pkg: &str, last_line: usize, url_prefix: &str) -> Block {
    let position = Position::line(last_line + 2);
    Block::Heading(Heading {
        position,
        level: PACKAGE_HEADING_LEVEL,
        id: None,
        text: Text {
            position,
            inline: vec![Inline::Link {
                url: format!("{url_prefix}{pkg}/"),
                title: String::new(),
                inner: vec![Inline::Plain(pkg.to_string())],
            }],
        },
    })
}
