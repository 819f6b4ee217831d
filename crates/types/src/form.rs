//! The form definition: an ordered list of field descriptors plus paging.

use crate::field::{FieldDescriptor, FieldType};
use crate::ids::{FieldId, FormId};
use serde::{Deserialize, Serialize};

/// Page titles of a multi-page form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub pages: Vec<String>,
}

/// A form definition. Fields are kept in form order, which is also render
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    pub id: FormId,
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl Form {
    pub fn field(&self, id: FieldId) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Number of pages, derived from pagination when present.
    pub fn page_count(&self) -> usize {
        match &self.pagination {
            Some(p) if !p.pages.is_empty() => p.pages.len(),
            _ => 1,
        }
    }

    pub fn page_title(&self, page: u32) -> Option<&str> {
        let pages = &self.pagination.as_ref()?.pages;
        pages.get(page.saturating_sub(1) as usize).map(String::as_str)
    }

    /// Whether the form contains any product-family field.
    pub fn has_products(&self) -> bool {
        self.fields.iter().any(|f| f.field_type.is_product_family())
    }

    /// Descriptors sitting between a section break and the next section or
    /// page break. Used to decide whether a section is empty.
    pub fn section_fields(&self, section_id: FieldId) -> Vec<&FieldDescriptor> {
        let mut inside = false;
        let mut out = Vec::new();
        for field in &self.fields {
            match &field.field_type {
                FieldType::Section | FieldType::Page => {
                    if inside {
                        break;
                    }
                    inside = field.id == section_id;
                }
                _ if inside => out.push(field),
                _ => {}
            }
        }
        out
    }
}
