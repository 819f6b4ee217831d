//! Renders a sample order entry through the full pipeline.
//!
//! Run with: cargo run --example render_entry

use chrono::Utc;
use formpdf::render::EchoRenderer;
use formpdf::{
    AccessReview, Entry, Form, GlobalSettings, PdfConfig, PdfStore, Pipeline, Visitor,
};
use serde_json::json;

fn sample_form() -> Form {
    serde_json::from_value(json!({
        "id": 12,
        "title": "Conference Registration",
        "fields": [
            {"id": 1, "type": "name", "label": "Name", "inputs": [
                {"id": "1.3", "label": "First"},
                {"id": "1.6", "label": "Last"}
            ]},
            {"id": 2, "type": "email", "label": "Email"},
            {"id": 3, "type": "radio", "label": "Ticket", "choices": [
                {"text": "Full pass", "value": "full"},
                {"text": "One day", "value": "day"}
            ]},
            {"id": 4, "type": "product", "label": "Workshop", "base_price": "$150.00"},
            {"id": 5, "type": "total", "label": "Total"}
        ]
    }))
    .expect("sample form is well-formed")
}

fn sample_entry() -> Entry {
    serde_json::from_value(json!({
        "id": 407,
        "form_id": 12,
        "ip": "203.0.113.9",
        "date_created": Utc::now().to_rfc3339(),
        "values": {
            "1.3": "Ada",
            "1.6": "Lovelace",
            "2": "ada@example.test",
            "3": "full",
            "4.1": "Workshop",
            "4.2": "$150.00",
            "4.3": "1"
        }
    }))
    .expect("sample entry is well-formed")
}

fn main() {
    env_logger::init();

    let settings = GlobalSettings::default();
    let store = PdfStore::new(std::env::temp_dir().join("formpdf-demo"));
    let identity = Visitor::anonymous("203.0.113.9");
    let pipeline = Pipeline::new(&settings, &EchoRenderer, &store, &identity);

    let config = PdfConfig {
        id: "554doz".to_string(),
        name: "Registration receipt".to_string(),
        filename: "{form_title}-{entry_id}".to_string(),
        ..Default::default()
    };
    let form = sample_form();
    let entry = sample_entry();

    match pipeline.check_access(&config, &entry, "/pdf/554doz/407", Utc::now()) {
        Ok(AccessReview::Granted) => {}
        Ok(AccessReview::Redirect(url)) => {
            println!("redirect to {url}");
            return;
        }
        Err(err) => {
            eprintln!("denied: {}", err.user_message(pipeline.privileged()));
            return;
        }
    }

    match pipeline.generate(&config, &form, &entry) {
        Ok(generated) => {
            println!("wrote {}", generated.path.display());
            println!("--- document body ---");
            println!("{}", String::from_utf8_lossy(&generated.bytes));
        }
        Err(err) => eprintln!("failed: {}", err.user_message(pipeline.privileged())),
    }
}
