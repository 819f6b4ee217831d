//! # formpdf-core
//!
//! The document generation pipeline. Given a form, an entry, and a document
//! configuration, this crate gates the request through the access chain,
//! assembles the entry into HTML, hands it to the configured PDF engine, and
//! manages the generated files on disk.
//!
//! All collaborators are injected: the engine through
//! [`formpdf_render_core::HtmlRenderer`], identity through
//! [`formpdf_access::IdentityProvider`], and the clock as a plain argument.
//! Nothing in this crate reads ambient global state.

pub mod config;
pub mod error;
pub mod filename;
pub mod pipeline;
pub mod store;

pub use config::{GlobalSettings, PdfConfig, upgrade_legacy_settings};
pub use error::{GENERIC_RENDER_MESSAGE, PipelineError};
pub use filename::{resolve_filename, sanitize_filename};
pub use pipeline::{AccessReview, GeneratedPdf, Pipeline};
pub use store::PdfStore;
