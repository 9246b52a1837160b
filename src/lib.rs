//! # pep2html
//!
//! Renders plain-text PEP documents (an RFC-822 style header followed by an
//! indented body) to minimal HTML pages.
//!
//! ## Example
//!
//! ```no_run
//! use pep2html::{PepToHtml, RenderOptions};
//!
//! let converter = PepToHtml::new(RenderOptions::default());
//! converter.convert_file("pep-0008.txt", "pep-0008.html").unwrap();
//!
//! let html = converter
//!     .convert_str("PEP: 7\nTitle: Style Guide\n\n    Body\n", "pep-0007.txt")
//!     .unwrap();
//! assert!(html.contains("<title>PEP 7 -- Style Guide</title>"));
//! ```

pub mod adapters;
pub mod batch;
pub mod converter;
pub mod core;
pub mod error;
pub mod install;
pub mod render;

pub use converter::PepToHtml;
pub use error::{Error, Result};
pub use install::InstallTarget;

/// Options for rendering PEP documents.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Identity of the index document, which gets no `index` link.
    pub master_index: String,
    /// Stylesheet linked from every titled page.
    pub stylesheet: String,
    /// Target of the `home` navigation link.
    pub home_href: String,
    /// Target of the `index` navigation link.
    pub index_href: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            master_index: "pep-0000".to_string(),
            stylesheet: "style.css".to_string(),
            home_href: "../".to_string(),
            index_href: ".".to_string(),
        }
    }
}
