//! # formpdf-layout
//!
//! Layout-aware HTML assembly: the [`FieldContainer`] state machine groups
//! fields into rows and columns based on their CSS layout hints, and the
//! [`assembler`] walks a form in page order producing the document body.

pub mod assembler;
pub mod container;

pub use assembler::{AssemblerOptions, assemble_body};
pub use container::{ColumnHint, FieldContainer};
