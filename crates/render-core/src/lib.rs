//! Core rendering abstractions for HTML to PDF conversion.
//!
//! This crate defines the boundary to the actual PDF engine:
//! - `HtmlRenderer` trait for abstracting the HTML-to-PDF conversion step
//! - `HtmlDocument` and `RenderSettings` describing what to convert and how
//! - Error types for rendering operations

mod error;
mod traits;
mod types;

pub use error::RenderError;
pub use traits::{EchoRenderer, HtmlRenderer};
pub use types::{HtmlDocument, Margins, Orientation, OutputFormat, Paper, RenderSettings, Watermark};
