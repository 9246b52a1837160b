/// A single `Key: value` line from the document preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataField {
    pub key: String,
    pub value: String,
}

impl MetadataField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered metadata block parsed from the top of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub fields: Vec<MetadataField>,
}

impl Header {
    /// Effective document title.
    ///
    /// The last `Title` and last `PEP` fields win (keys match case-insensitively).
    /// With a PEP number the result is `PEP <n> -- <title>`, otherwise just the
    /// title, which may be empty.
    pub fn title(&self) -> String {
        let (title, pep) = self
            .fields
            .iter()
            .fold((None, None), |(title, pep), field| {
                if field.key.eq_ignore_ascii_case("title") {
                    (Some(field.value.as_str()), pep)
                } else if field.key.eq_ignore_ascii_case("pep") {
                    (title, Some(field.value.as_str()))
                } else {
                    (title, pep)
                }
            });
        let title = title.unwrap_or_default();
        match pep {
            Some(pep) if !pep.is_empty() => format!("PEP {} -- {}", pep, title),
            _ => title.to_string(),
        }
    }
}

/// A segment of the rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    /// Already linked and escaped text for the open `<pre>` block.
    Preformatted(String),
    /// Raw heading text, stripped of surrounding whitespace.
    Heading(String),
}

#[derive(Debug, Clone, Default)]
pub struct DocumentAst {
    pub header: Header,
    pub blocks: Vec<BlockNode>,
    /// Whether the navigation bar carries the `index` link.
    pub index_link: bool,
}
