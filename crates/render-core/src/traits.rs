use crate::error::RenderError;
use crate::types::{HtmlDocument, RenderSettings};

/// A trait for PDF engines, abstracting the HTML-to-PDF conversion step.
///
/// Implementations receive a finished document and page setup and return the
/// raw PDF bytes. They never see form or entry data.
pub trait HtmlRenderer {
    fn render(&self, document: &HtmlDocument, settings: &RenderSettings)
    -> Result<Vec<u8>, RenderError>;
}

/// A renderer that emits its input back as plain bytes instead of driving a
/// PDF engine. The output is not a PDF; it exists so pipelines can be
/// exercised end to end without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoRenderer;

impl HtmlRenderer for EchoRenderer {
    fn render(
        &self,
        document: &HtmlDocument,
        settings: &RenderSettings,
    ) -> Result<Vec<u8>, RenderError> {
        if document.body.is_empty() {
            return Err(RenderError::Document("empty body".to_string()));
        }
        let mut out = Vec::new();
        if let Some(header) = document.first_header.as_ref().or(document.header.as_ref()) {
            out.extend_from_slice(header.as_bytes());
            out.push(b'\n');
        }
        out.extend_from_slice(document.body.as_bytes());
        if let Some(footer) = &document.footer {
            out.push(b'\n');
            out.extend_from_slice(footer.as_bytes());
        }
        if let Some(mark) = &settings.watermark {
            out.push(b'\n');
            out.extend_from_slice(mark.text.as_bytes());
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_round_trips_body_and_regions() {
        let doc = HtmlDocument {
            body: "<p>hi</p>".into(),
            header: Some("<h1>head</h1>".into()),
            ..Default::default()
        };
        let bytes = EchoRenderer.render(&doc, &RenderSettings::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("<h1>head</h1>\n"));
        assert!(text.contains("<p>hi</p>"));
    }

    #[test]
    fn empty_body_is_rejected() {
        let err = EchoRenderer
            .render(&HtmlDocument::default(), &RenderSettings::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::Document(_)));
    }
}
