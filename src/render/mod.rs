mod escape;
mod html;

use crate::core::ast::DocumentAst;
use crate::Result;

pub use escape::{escape_html, escape_html_attr, push_escaped_char};
pub use html::HtmlRenderer;

pub trait Renderer {
    fn render(&self, document: &DocumentAst) -> Result<String>;
}
