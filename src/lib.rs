//! # formpdf
//!
//! Renders form entry submissions into PDF documents.
//!
//! The workspace splits the pipeline into focused crates; this root crate
//! re-exports the public surface:
//! - [`types`]: the form/entry data model
//! - [`fields`]: per-field-type value normalizers and the field factory
//! - [`layout`]: row/column grouping and HTML body assembly
//! - [`access`]: the ordered access-check chain
//! - [`render`]: the boundary trait to the actual HTML-to-PDF engine
//! - [`core`]: the orchestrator tying it all together
//!
//! ## Quick start
//!
//! Build a [`Pipeline`] from your settings, a [`PdfStore`], an engine
//! implementing [`HtmlRenderer`], and an identity provider, then call
//! `check_access` followed by `generate`. See `demos/render_entry.rs` for a
//! complete program.

pub use formpdf_access as access;
pub use formpdf_core as core;
pub use formpdf_fields as fields;
pub use formpdf_layout as layout;
pub use formpdf_render_core as render;
pub use formpdf_types as types;

// The types most embedders need, flattened.
pub use formpdf_access::{AccessError, Decision, IdentityProvider, Visitor};
pub use formpdf_core::{
    AccessReview, GeneratedPdf, GlobalSettings, PdfConfig, PdfStore, Pipeline, PipelineError,
};
pub use formpdf_fields::{FieldContext, FieldFactory, FormData, RenderPrefs};
pub use formpdf_layout::{AssemblerOptions, assemble_body};
pub use formpdf_render_core::{HtmlDocument, HtmlRenderer, RenderError, RenderSettings};
pub use formpdf_types::{Entry, FieldDescriptor, FieldType, Form};
