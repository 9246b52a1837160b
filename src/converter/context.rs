use crate::RenderOptions;
use std::path::Path;

/// Per-document state shared by the header parser, linker and extractor.
pub struct ConversionContext<'a> {
    name: String,
    options: &'a RenderOptions,
}

impl<'a> ConversionContext<'a> {
    /// `name` is the document identity, usually its base file name.
    pub fn new(name: &str, options: &'a RenderOptions) -> Self {
        Self {
            name: document_stem(name).to_string(),
            options,
        }
    }

    /// Document identity with any extension removed.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    /// True when `reference` (e.g. `pep-0008.txt`) names this document.
    pub fn is_self_reference(&self, reference: &str) -> bool {
        document_stem(reference) == self.name
    }

    pub fn is_master_index(&self) -> bool {
        document_stem(&self.options.master_index) == self.name
    }
}

/// Strips directories and the extension: `dir/pep-0008.txt` -> `pep-0008`.
pub fn document_stem(name: &str) -> &str {
    let path = Path::new(name);
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_stem() {
        assert_eq!(document_stem("pep-0008.txt"), "pep-0008");
        assert_eq!(document_stem("peps/pep-0008.txt"), "pep-0008");
        assert_eq!(document_stem("pep-0008"), "pep-0008");
    }

    #[test]
    fn test_self_reference_ignores_extension() {
        let options = RenderOptions::default();
        let context = ConversionContext::new("pep-0008.txt", &options);
        assert!(context.is_self_reference("pep-0008.txt"));
        assert!(context.is_self_reference("pep-0008"));
        assert!(!context.is_self_reference("pep-0080.txt"));
    }

    #[test]
    fn test_master_index() {
        let options = RenderOptions::default();
        assert!(ConversionContext::new("pep-0000.txt", &options).is_master_index());
        assert!(!ConversionContext::new("pep-0001.txt", &options).is_master_index());
    }
}
