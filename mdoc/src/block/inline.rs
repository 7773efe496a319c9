/// Inline elements that appear within a run of text.
/// Inline types nest freely within one another.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Plain(String),
    Code(String),
    Html(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        url: String,
        title: String,
        inner: Vec<Inline>,
    },
    Image {
        url: String,
        title: String,
        alt: Vec<Inline>,
    },
    SoftBreak,
    HardBreak,
}

impl Inline {
    /// Append the unformatted text of this node to `out`.
    pub fn print_text(&self, out: &mut String) {
        match self {
            Inline::Plain(s) | Inline::Code(s) | Inline::Html(s) => out.push_str(s),
            Inline::Strong(inner)
            | Inline::Emphasis(inner)
            | Inline::Strikethrough(inner)
            | Inline::Link { inner, .. } => {
                for child in inner {
                    child.print_text(out);
                }
            }
            Inline::Image { alt, .. } => {
                for child in alt {
                    child.print_text(out);
                }
            }
            Inline::SoftBreak | Inline::HardBreak => out.push('\n'),
        }
    }
}

/// All the text in a slice of inline nodes, without any formatting.
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        inline.print_text(&mut out);
    }
    out
}
