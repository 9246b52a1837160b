mod extractor;

use crate::converter::ConversionContext;
use crate::core::ast::DocumentAst;
use crate::Result;
use std::io::BufRead;

pub trait AstExtractor {
    fn extract<R: BufRead>(
        &self,
        reader: R,
        context: &ConversionContext<'_>,
    ) -> Result<DocumentAst>;
}

pub use extractor::{classify, BodyLine, PepExtractor, LOCAL_VARIABLES};
