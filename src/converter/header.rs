//! Header parser - reads the RFC-822 style preamble of a PEP.

use crate::core::ast::{Header, MetadataField};
use crate::Result;
use std::io::BufRead;

/// Parser for the metadata block at the top of a document.
pub struct HeaderParser;

impl HeaderParser {
    /// Consumes header lines from `reader` up to and including the first blank
    /// line.
    ///
    /// A line without a `:` (or a continuation with nothing to continue) ends
    /// the header early; it is returned so the caller can treat it as the first
    /// body line.
    pub fn parse<R: BufRead>(reader: &mut R) -> Result<(Header, Option<String>)> {
        let mut header = Header::default();

        loop {
            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 || line.trim().is_empty() {
                break;
            }

            let starts_with_space = line.chars().next().is_some_and(char::is_whitespace);
            if starts_with_space {
                match header.fields.last_mut() {
                    Some(field) => field.value.push_str(&line),
                    None => return Ok((header, Some(line))),
                }
                continue;
            }

            match line.split_once(':') {
                Some((key, value)) => header.fields.push(MetadataField::new(key, value.trim())),
                None => return Ok((header, Some(line))),
            }
        }

        log::debug!("parsed {} header fields", header.fields.len());
        Ok((header, None))
    }
}
