use super::AstExtractor;
use crate::converter::{Autolinker, ConversionContext, HeaderParser};
use crate::core::ast::{BlockNode, DocumentAst};
use crate::Result;
use std::io::BufRead;

/// Body line that ends processing; anything after it is never read.
pub const LOCAL_VARIABLES: &str = "Local Variables:";

const PAGE_BREAK: char = '\u{0c}';
const FOOTNOTE_MARKER: &str = "[*]";

/// Classification of a single body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyLine<'l> {
    /// Starts with a form feed; dropped from the output.
    PageBreak,
    /// The `Local Variables:` trailer.
    Terminator,
    /// Non-indented line, promoted to `<h3>`. Holds the stripped text.
    Heading(&'l str),
    /// Everything else, including its line ending.
    Text(&'l str),
}

pub fn classify(line: &str) -> BodyLine<'_> {
    let Some(first) = line.chars().next() else {
        return BodyLine::Text(line);
    };
    if first == PAGE_BREAK {
        return BodyLine::PageBreak;
    }
    if first.is_whitespace() || line.starts_with(FOOTNOTE_MARKER) {
        return BodyLine::Text(line);
    }
    let stripped = line.trim();
    if stripped == LOCAL_VARIABLES {
        BodyLine::Terminator
    } else {
        BodyLine::Heading(stripped)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PepExtractor;

impl AstExtractor for PepExtractor {
    fn extract<R: BufRead>(
        &self,
        mut reader: R,
        context: &ConversionContext<'_>,
    ) -> Result<DocumentAst> {
        let (header, carried) = HeaderParser::parse(&mut reader)?;
        let mut blocks = Vec::new();
        let mut text = String::new();
        let mut next = carried;

        loop {
            let line = match next.take() {
                Some(line) => line,
                None => {
                    let mut line = String::new();
                    if reader.read_line(&mut line)? == 0 {
                        break;
                    }
                    line
                }
            };

            match classify(&line) {
                BodyLine::PageBreak => {}
                BodyLine::Terminator => {
                    log::debug!("{}: stopped at local variables trailer", context.name());
                    break;
                }
                BodyLine::Heading(heading) => {
                    if !text.is_empty() {
                        blocks.push(BlockNode::Preformatted(std::mem::take(&mut text)));
                    }
                    blocks.push(BlockNode::Heading(heading.to_string()));
                }
                BodyLine::Text(line) => text.push_str(&Autolinker::convert(line, context)),
            }
        }

        if !text.is_empty() {
            blocks.push(BlockNode::Preformatted(text));
        }

        Ok(DocumentAst {
            header,
            blocks,
            index_link: !context.is_master_index(),
        })
    }
}
