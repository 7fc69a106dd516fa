//! Rendering reports to HTML and JSON.

mod color;
mod html;
mod json;
mod options;
mod styles;

pub use color::{is_dark, Rgb};
pub use html::{escape_attr, escape_text, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{CoverLabels, HighlightAssets, PageMargins, RenderOptions};
pub use styles::{generate_styles, PAGE_NUMBER_MARGIN};
