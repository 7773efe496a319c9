use mdoc::{Block, Document, Empty, ParseOptions, Parser};

use crate::error::MergeError;
use crate::package::{stdlib_package, stdlib_package_heading};
use crate::prune::remove_empty_sections;
use crate::tree::{FragmentTree, sorted_markdown_filenames};

/// Knobs for [`merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub parse: ParseOptions,
    /// Package headings link to `{package_url_prefix}{pkg}/`.
    pub package_url_prefix: String,
    /// Only files whose path ends in this suffix are fragments.
    pub suffix: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        MergeOptions {
            parse: ParseOptions::default(),
            package_url_prefix: "/pkg/".to_string(),
            suffix: ".md".to_string(),
        }
    }
}

/// Combines the Markdown fragments in `tree` into a single document.
///
/// Fragments are concatenated in byte order of their paths. Headings with
/// no content are removed. Link keys must be unique across all fragments.
///
/// Fragments under "*stdlib/*minor/" are named after the package they
/// describe, and get a package heading inserted before the first fragment
/// of each package.
pub fn merge(tree: &impl FragmentTree, options: &MergeOptions) -> Result<Document, MergeError> {
    let filenames = sorted_markdown_filenames(tree, &options.suffix)?;
    let parser = Parser::new(options.parse);
    let mut merger = Merger::new(options.package_url_prefix.clone());
    for filename in &filenames {
        let source = tree.read(filename)?;
        merger.add(filename, parser.parse(&source))?;
    }
    Ok(merger.finish())
}

/// Incremental form of [`merge`], for callers that supply parsed fragments
/// themselves. Fragments must be added in merge order.
#[derive(Debug)]
pub struct Merger {
    doc: Document,
    /// Package of the previous fragment, empty if it had none.
    prev_pkg: String,
    package_url_prefix: String,
}

impl Merger {
    pub fn new(package_url_prefix: impl Into<String>) -> Self {
        Merger {
            doc: Document::empty(),
            prev_pkg: String::new(),
            package_url_prefix: package_url_prefix.into(),
        }
    }

    /// Fold one fragment into the result. The fragment is consumed: its
    /// blocks are moved into the result after their lines are shifted.
    pub fn add(&mut self, filename: &str, fragment: Document) -> Result<(), MergeError> {
        let Document { mut blocks, links } = fragment;
        let Some(first_line) = blocks.first().map(|b| b.position().start_line) else {
            log::debug!("skipping {filename}: no content");
            return Ok(());
        };

        if let Some(last_line) = self.last_line() {
            // The first fragment of a new package under "Minor changes to
            // the library" gets a heading for the package.
            let pkg = stdlib_package(filename).unwrap_or_default();
            if !pkg.is_empty() && pkg != self.prev_pkg {
                log::debug!("inserting heading for package {pkg}");
                let heading = stdlib_package_heading(&pkg, last_line, &self.package_url_prefix);
                self.doc.blocks.push(heading);
            }
            self.prev_pkg = pkg;

            // Leave a blank line between the current and new blocks, so the
            // end of a file acts as a blank line.
            let last_line = self.last_line().unwrap_or(last_line);
            let delta = (last_line + 2) as isize - first_line as isize;
            for block in &mut blocks {
                block.add_lines(delta);
            }
        }

        log::debug!("merging {filename}: {} blocks", blocks.len());
        self.doc
            .blocks
            .extend(blocks.into_iter().filter(|b| !b.is_empty_marker()));

        for (key, link) in links {
            if self.doc.links.contains_key(&key) {
                return Err(MergeError::DuplicateLinkReference {
                    key,
                    filename: filename.to_string(),
                });
            }
            self.doc.links.insert(key, link);
        }
        Ok(())
    }

    /// Remove empty sections and return the merged document.
    pub fn finish(self) -> Document {
        let mut doc = self.doc;
        doc.blocks = remove_empty_sections(doc.blocks);
        if !doc.links.is_empty() {
            if let Some(last) = doc.last_block() {
                // A blank line separates the blocks from the link definitions.
                let mut position = last.position();
                position.shift(2);
                doc.blocks.push(Block::Empty(Empty { position }));
            }
        }
        doc
    }

    fn last_line(&self) -> Option<usize> {
        self.doc.last_block().map(|b| b.position().end_line)
    }
}
