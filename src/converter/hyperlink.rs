//! Autolinker - turns URLs and PEP references in body text into anchors.

use super::context::{document_stem, ConversionContext};
use crate::render::{escape_html, escape_html_attr, push_escaped_char};
use regex::Regex;
use std::sync::OnceLock;

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?P<url>(?:http|ftp):[-_a-zA-Z0-9/.+~:?#$=&]+)|(?P<pep>pep-[0-9]+(?:\.txt)?)")
            .expect("link pattern is valid")
    })
}

/// One unit of a scanned line, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'t> {
    /// `http:` or `ftp:` followed by URL-safe characters.
    Url(&'t str),
    /// `pep-NNNN`, optionally with a `.txt` suffix.
    PepRef(&'t str),
    /// Any character not covered by the patterns above.
    Char(char),
}

#[derive(Debug, Clone, Copy)]
struct Found {
    start: usize,
    end: usize,
    url: bool,
}

/// Single left-to-right pass over a line. Matches never overlap.
pub struct Tokens<'t> {
    line: &'t str,
    pos: usize,
    found: Option<Found>,
    exhausted: bool,
}

impl<'t> Tokens<'t> {
    pub fn new(line: &'t str) -> Self {
        Self {
            line,
            pos: 0,
            found: None,
            exhausted: false,
        }
    }

    fn search(&self) -> Option<Found> {
        let caps = link_pattern().captures_at(self.line, self.pos)?;
        let whole = caps.get(0)?;
        Some(Found {
            start: whole.start(),
            end: whole.end(),
            url: caps.name("url").is_some(),
        })
    }
}

impl<'t> Iterator for Tokens<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Token<'t>> {
        if self.pos >= self.line.len() {
            return None;
        }

        // Only rescan once the previous match has been consumed.
        if !self.exhausted && self.found.map_or(true, |f| f.start < self.pos) {
            self.found = self.search();
            self.exhausted = self.found.is_none();
        }

        match self.found {
            Some(found) if found.start == self.pos => {
                let text = &self.line[found.start..found.end];
                self.pos = found.end;
                Some(if found.url {
                    Token::Url(text)
                } else {
                    Token::PepRef(text)
                })
            }
            _ => {
                let ch = self.line[self.pos..].chars().next()?;
                self.pos += ch.len_utf8();
                Some(Token::Char(ch))
            }
        }
    }
}

/// Converter for body lines.
pub struct Autolinker;

impl Autolinker {
    /// Links and escapes one body line. References to the current document
    /// stay plain text.
    pub fn convert(line: &str, context: &ConversionContext) -> String {
        let mut out = String::with_capacity(line.len());
        for token in Tokens::new(line) {
            match token {
                Token::Url(url) => push_anchor(&mut out, url, url),
                Token::PepRef(text) if context.is_self_reference(text) => {
                    out.push_str(&escape_html(text));
                }
                Token::PepRef(text) => {
                    let target = format!("{}.html", document_stem(text));
                    push_anchor(&mut out, &target, text);
                }
                Token::Char(ch) => push_escaped_char(&mut out, ch),
            }
        }
        out
    }
}

fn push_anchor(out: &mut String, href: &str, text: &str) {
    out.push_str("<a href='");
    out.push_str(&escape_html_attr(href));
    out.push_str("'>");
    out.push_str(&escape_html(text));
    out.push_str("</a>");
}
