//! Converter modules for PEP text to HTML transformation.

mod context;
mod header;
mod hyperlink;

use crate::adapters::pep::{AstExtractor, PepExtractor};
use crate::render::{HtmlRenderer, Renderer};
use crate::{RenderOptions, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

pub use self::context::{document_stem, ConversionContext};
pub use self::header::HeaderParser;
pub use self::hyperlink::{Autolinker, Token, Tokens};

/// Permission bits for rendered pages: owner/group writable, world readable.
pub const OUTPUT_MODE: u32 = 0o664;

/// Main converter struct that renders one PEP document per call.
pub struct PepToHtml {
    options: RenderOptions,
}

impl PepToHtml {
    /// Creates a new converter with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders PEP source text. `name` identifies the document (for example
    /// `pep-0008.txt`) and suppresses links to itself.
    pub fn convert_str(&self, text: &str, name: &str) -> Result<String> {
        self.convert_reader(text.as_bytes(), name)
    }

    /// Renders a document read line by line from `reader`.
    ///
    /// Reading stops at the `Local Variables:` trailer, so the reader may not
    /// be fully consumed.
    pub fn convert_reader<R: BufRead>(&self, reader: R, name: &str) -> Result<String> {
        let context = ConversionContext::new(name, &self.options);
        let document = PepExtractor.extract(reader, &context)?;
        log::debug!(
            "{}: {} header fields, {} body blocks",
            context.name(),
            document.header.fields.len(),
            document.blocks.len()
        );
        HtmlRenderer::new(&self.options).render(&document)
    }

    /// Converts `infile` and writes the page to `outfile`.
    ///
    /// The document identity is the base name of `infile`. I/O errors are
    /// returned as-is; a partially written `outfile` is left in place.
    pub fn convert_file<P, Q>(&self, infile: P, outfile: Q) -> Result<()>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let infile = infile.as_ref();
        let outfile = outfile.as_ref();
        let name = infile
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let html = {
            let reader = BufReader::new(File::open(infile)?);
            self.convert_reader(reader, &name)?
        };

        let mut output = File::create(outfile)?;
        output.write_all(html.as_bytes())?;
        output.flush()?;
        drop(output);

        set_output_permissions(outfile)?;
        Ok(())
    }
}

#[cfg(unix)]
fn set_output_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(OUTPUT_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_output_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_str_end_to_end() {
        let html = PepToHtml::with_defaults()
            .convert_str(
                "Title: Sample\nPEP: 1\n\n    Hello http://x.org world\n",
                "pep-0001",
            )
            .expect("convert should work");
        assert!(html.contains("<title>PEP 1 -- Sample</title>"));
        assert!(html.contains("<pre>    Hello <a href='http://x.org'>http://x.org</a> world\n</pre>"));
    }

    #[test]
    fn test_custom_options() {
        let converter = PepToHtml::new(RenderOptions {
            master_index: "pep-0001".to_string(),
            stylesheet: "pep.css".to_string(),
            ..Default::default()
        });
        let html = converter
            .convert_str("Title: T\n\n", "pep-0001.txt")
            .expect("convert should work");
        assert!(html.contains("href=\"pep.css\""));
        assert!(!html.contains(">index<"));
    }
}
