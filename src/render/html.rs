use super::escape::{escape_html, escape_html_attr};
use crate::core::ast::{BlockNode, DocumentAst};
use crate::render::Renderer;
use crate::{RenderOptions, Result};
use std::fmt::Write as _;

// Generated pages put <h3> inside the body flow between <pre> blocks, so they
// are not strictly valid against this DTD.
const DTD: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.0 Transitional//EN\"\n                      \"http://www.w3.org/TR/REC-html40/loose.dtd\">";

/// Writes the fixed HTML 4.0 page skeleton around a parsed document.
#[derive(Debug, Clone)]
pub struct HtmlRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    fn write_head(&self, out: &mut String, document: &DocumentAst) -> std::fmt::Result {
        writeln!(out, "{}\n<html>\n<head>", DTD)?;
        let title = document.header.title();
        if !title.is_empty() {
            writeln!(out, "  <title>{}</title>", escape_html(&title))?;
            writeln!(
                out,
                "  <link rel=\"STYLESHEET\" href=\"{}\">",
                escape_html_attr(&self.options.stylesheet)
            )?;
        }
        writeln!(out, "</head>")
    }

    fn write_navigation(&self, out: &mut String, document: &DocumentAst) -> std::fmt::Result {
        writeln!(out, "<body bgcolor=\"white\">\n<div class=\"navigation\">")?;
        writeln!(
            out,
            "[<b><a href=\"{}\">home</a></b>]",
            escape_html_attr(&self.options.home_href)
        )?;
        if document.index_link {
            writeln!(
                out,
                "[<b><a href=\"{}\">index</a></b>]",
                escape_html_attr(&self.options.index_href)
            )?;
        }
        writeln!(out, "</div>")
    }

    fn write_metadata(&self, out: &mut String, document: &DocumentAst) -> std::fmt::Result {
        writeln!(out, "<div class=\"header\">\n<table border=\"0\">")?;
        for field in &document.header.fields {
            writeln!(
                out,
                "  <tr><th align='right'>{}:</th><td>{}</td></tr>",
                escape_html(&field.key),
                escape_html(&field.value)
            )?;
        }
        writeln!(out, "</table>\n</div>\n<hr />")
    }

    fn write_body(&self, out: &mut String, document: &DocumentAst) -> std::fmt::Result {
        out.push_str("<pre>");
        for block in &document.blocks {
            match block {
                BlockNode::Preformatted(text) => out.push_str(text),
                BlockNode::Heading(heading) => {
                    write!(out, "</pre>\n<h3>{}</h3>\n<pre>", escape_html(heading))?;
                }
            }
        }
        writeln!(out, "</pre>\n</body>\n</html>")
    }
}

impl Renderer for HtmlRenderer<'_> {
    fn render(&self, document: &DocumentAst) -> Result<String> {
        let mut out = String::new();
        self.write_head(&mut out, document)?;
        self.write_navigation(&mut out, document)?;
        self.write_metadata(&mut out, document)?;
        self.write_body(&mut out, document)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ast::{Header, MetadataField};

    fn render(document: &DocumentAst) -> String {
        let options = RenderOptions::default();
        HtmlRenderer::new(&options)
            .render(document)
            .expect("render should work")
    }

    #[test]
    fn test_untitled_document_has_no_title_or_stylesheet() {
        let html = render(&DocumentAst::default());
        assert!(!html.contains("<title>"));
        assert!(!html.contains("STYLESHEET"));
        assert!(html.contains("<head>\n</head>\n"));
        assert!(html.ends_with("<hr />\n<pre></pre>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_metadata_rows_escaped() {
        let document = DocumentAst {
            header: Header {
                fields: vec![
                    MetadataField::new("Author", "A <a@b.org>"),
                    MetadataField::new("Title", "X & Y"),
                ],
            },
            ..Default::default()
        };
        let html = render(&document);
        assert!(html.contains("  <title>X &amp; Y</title>\n"));
        assert!(html.contains(
            "  <tr><th align='right'>Author:</th><td>A &lt;a@b.org&gt;</td></tr>\n"
        ));
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_navigation_index_link() {
        let mut document = DocumentAst::default();
        assert!(!render(&document).contains(">index<"));
        document.index_link = true;
        assert!(render(&document).contains("[<b><a href=\".\">index</a></b>]\n"));
    }

    #[test]
    fn test_heading_switches_pre_blocks() {
        let document = DocumentAst {
            blocks: vec![
                BlockNode::Preformatted("  a\n".to_string()),
                BlockNode::Heading("R&D".to_string()),
                BlockNode::Preformatted("  b\n".to_string()),
            ],
            ..Default::default()
        };
        let html = render(&document);
        assert!(html.contains("<pre>  a\n</pre>\n<h3>R&amp;D</h3>\n<pre>  b\n</pre>\n"));
    }
}
