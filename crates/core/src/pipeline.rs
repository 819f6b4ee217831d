//! The generation orchestrator: access review, HTML assembly, engine
//! handoff, and persistence.

use crate::config::{GlobalSettings, PdfConfig};
use crate::error::PipelineError;
use crate::filename::{resolve_filename, sanitize_filename};
use crate::store::PdfStore;
use chrono::{DateTime, Utc};
use formpdf_access::{AccessChain, AccessContext, AccessError, AccessPolicy, Decision, IdentityProvider};
use formpdf_fields::{FieldContext, FieldFactory, NoUploads, RenderPrefs, UploadResolver};
use formpdf_layout::{AssemblerOptions, assemble_body};
use formpdf_render_core::{HtmlDocument, HtmlRenderer, RenderSettings};
use formpdf_types::{Entry, Form};
use std::path::PathBuf;

/// Outcome of the access review for one request. Denials come back as
/// [`PipelineError::Access`]; a redirect is part of the normal auth flow.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AccessReview {
    Granted,
    Redirect(String),
}

/// One generated document, written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedPdf {
    /// Where the document was written under the temp layout.
    pub path: PathBuf,
    /// The resolved, sanitised filename without extension.
    pub filename: String,
    /// The raw document bytes, for streaming without a re-read.
    pub bytes: Vec<u8>,
}

/// Coordinates one request end to end. Every collaborator is injected at
/// construction; the clock is an argument so tests control time.
pub struct Pipeline<'a> {
    settings: &'a GlobalSettings,
    renderer: &'a dyn HtmlRenderer,
    store: &'a PdfStore,
    identity: &'a dyn IdentityProvider,
    uploads: &'a dyn UploadResolver,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        settings: &'a GlobalSettings,
        renderer: &'a dyn HtmlRenderer,
        store: &'a PdfStore,
        identity: &'a dyn IdentityProvider,
    ) -> Self {
        Self {
            settings,
            renderer,
            store,
            identity,
            uploads: &NoUploads,
        }
    }

    /// Routes uploaded-file URLs through `resolver` so signatures and file
    /// fields can reference local paths.
    pub fn with_uploads(mut self, resolver: &'a dyn UploadResolver) -> Self {
        self.uploads = resolver;
        self
    }

    /// Whether the current user may see verbatim engine errors.
    pub fn privileged(&self) -> bool {
        self.identity.can(&self.settings.admin_capability)
    }

    /// Runs the full access chain for `config` and `entry`. Denials map to
    /// errors; `Redirect` is surfaced for the caller's auth flow.
    pub fn check_access(
        &self,
        config: &PdfConfig,
        entry: &Entry,
        request_url: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessReview, PipelineError> {
        if !config.id_is_valid() {
            return Err(AccessError::InvalidPdfId(config.id.clone()).into());
        }
        let policy = AccessPolicy {
            active: config.active,
            conditional_logic: config.conditional_logic.clone(),
            restricted_to_admin: self.settings.restricted_to_admin,
            timeout_minutes: self.settings.logged_out_timeout_minutes,
            required_capability: self.settings.admin_capability.clone(),
        };
        let ctx = AccessContext {
            entry,
            policy: &policy,
            identity: self.identity,
            request_url,
            now,
        };
        match AccessChain::standard().evaluate(&ctx) {
            Decision::Continue => Ok(AccessReview::Granted),
            Decision::Redirect(url) => Ok(AccessReview::Redirect(url)),
            Decision::Deny(err) => Err(err.into()),
        }
    }

    /// Assembles, renders, and persists one document. Callers are expected
    /// to have passed [`check_access`](Self::check_access) first.
    pub fn generate(
        &self,
        config: &PdfConfig,
        form: &Form,
        entry: &Entry,
    ) -> Result<GeneratedPdf, PipelineError> {
        let prefs = RenderPrefs {
            zip_before_city: self.settings.zip_before_city,
            show_section_content: config.show_section_content,
        };
        let ctx = FieldContext {
            form,
            entry,
            prefs: &prefs,
            uploads: self.uploads,
        };
        let factory = FieldFactory::new(ctx);
        let body = assemble_body(
            &factory,
            AssemblerOptions {
                show_empty: config.show_empty,
                show_html: config.show_html,
                show_page_names: config.show_page_names,
            },
        );

        let document = HtmlDocument {
            body,
            stylesheet: config.stylesheet.clone(),
            header: config.header.clone(),
            footer: config.footer.clone(),
            first_header: config.first_header.clone(),
            first_footer: config.first_footer.clone(),
        };
        let render_settings = RenderSettings {
            paper: config.paper,
            orientation: config.orientation,
            margins: config.margins,
            format: config.format,
            watermark: config.watermark.clone(),
            rtl: config.rtl,
        };
        let bytes = self.renderer.render(&document, &render_settings)?;

        let filename = sanitize_filename(&resolve_filename(&config.filename, form, entry));
        let path = self.store.tmp_path(form.id, entry.id, &filename);
        self.store.save(&path, &bytes)?;
        if config.always_save {
            if let Some(stable) = self.store.persist_path(form.id, entry.id, &filename) {
                self.store.save(&stable, &bytes)?;
            }
        }

        log::info!(
            "generated '{}' for form {} entry {} ({} bytes)",
            filename,
            form.id,
            entry.id,
            bytes.len()
        );
        Ok(GeneratedPdf {
            path,
            filename,
            bytes,
        })
    }

    /// Removes stale temp files per the configured age threshold.
    pub fn sweep(&self, now: DateTime<Utc>) -> usize {
        self.store.sweep(now, self.settings.sweep_max_age_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formpdf_access::Visitor;
    use formpdf_render_core::EchoRenderer;
    use formpdf_types::{EntryId, FieldDescriptor, FieldId, FieldType, FormId, InputKey};
    use std::collections::BTreeMap;

    fn form() -> Form {
        Form {
            id: FormId(12),
            title: "Order Form".into(),
            fields: vec![FieldDescriptor {
                id: FieldId(1),
                field_type: FieldType::Text,
                label: "Name".into(),
                ..Default::default()
            }],
            pagination: None,
        }
    }

    fn entry() -> Entry {
        Entry {
            id: EntryId(407),
            form_id: FormId(12),
            values: BTreeMap::from([(InputKey::from("1"), "Ada".to_string())]),
            created_by: None,
            ip: "203.0.113.9".to_string(),
            date_created: Utc::now(),
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn generates_and_persists_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let settings = GlobalSettings::default();
        let store = PdfStore::new(dir.path());
        let identity = Visitor::anonymous("203.0.113.9");
        let pipeline = Pipeline::new(&settings, &EchoRenderer, &store, &identity);

        let config = PdfConfig {
            id: "554doz".into(),
            filename: "{form_title}-{entry_id}".into(),
            ..Default::default()
        };
        let form = form();
        let entry = entry();

        let review = pipeline
            .check_access(&config, &entry, "/pdf/554doz/407", Utc::now())
            .unwrap();
        assert_eq!(review, AccessReview::Granted);

        let generated = pipeline.generate(&config, &form, &entry).unwrap();
        assert_eq!(generated.filename, "Order Form-407");
        assert!(generated.path.ends_with("12407/Order Form-407.pdf"));
        assert!(generated.path.exists());
        let written = String::from_utf8(generated.bytes).unwrap();
        assert!(written.contains("Ada"));
    }

    #[test]
    fn malformed_id_is_rejected_before_the_chain() {
        let dir = tempfile::tempdir().unwrap();
        let settings = GlobalSettings::default();
        let store = PdfStore::new(dir.path());
        let identity = Visitor::anonymous("203.0.113.9");
        let pipeline = Pipeline::new(&settings, &EchoRenderer, &store, &identity);

        let config = PdfConfig {
            id: "../secret".into(),
            active: false,
            ..Default::default()
        };
        let err = pipeline
            .check_access(&config, &entry(), "/pdf/x/407", Utc::now())
            .unwrap_err();
        match err {
            PipelineError::Access(access) => assert_eq!(access.code(), "invalid_pdf_id"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn always_save_writes_the_stable_copy() {
        let tmp = tempfile::tempdir().unwrap();
        let stable = tempfile::tempdir().unwrap();
        let settings = GlobalSettings::default();
        let store = PdfStore::new(tmp.path()).with_persist_root(stable.path());
        let identity = Visitor::anonymous("203.0.113.9");
        let pipeline = Pipeline::new(&settings, &EchoRenderer, &store, &identity);

        let config = PdfConfig {
            id: "a1".into(),
            filename: "receipt".into(),
            always_save: true,
            ..Default::default()
        };
        pipeline.generate(&config, &form(), &entry()).unwrap();
        assert!(stable.path().join("12407/receipt.pdf").exists());
    }
}
