//! Shared helpers for API integration tests

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::Router;
use docfill_api::config::AppConfig;
use docfill_api::state::AppState;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

static NEXT_DIR: AtomicU32 = AtomicU32::new(0);

/// Fresh scratch directory per test, namespaced by pid.
pub fn scratch_dir() -> PathBuf {
    let n = NEXT_DIR.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "docfill-api-test-{}-{}",
        std::process::id(),
        n
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Minimal n-page PDF with US Letter pages and a stub content stream.
pub fn build_template(pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let mut kids = Vec::new();
    let mut page_ids = Vec::new();
    for _ in 0..pages {
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            b"0.5 w 10 10 m 20 20 l S\n".to_vec(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => Object::Reference(content_id),
        });
        kids.push(Object::Reference(page_id));
        page_ids.push(page_id);
    }
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages as i64,
    });
    for page_id in page_ids {
        if let Ok(page) = doc.get_object_mut(page_id) {
            if let Ok(dict) = page.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Router plus state rooted in the given scratch directory, with the
/// serving directories created the way startup would.
pub fn test_app(root: &Path) -> (Router, Arc<AppState>) {
    let config = AppConfig {
        port: 5000,
        public_base_url: "http://localhost:5000".to_string(),
        template_path: root.join("document_template.pdf"),
        uploads_dir: root.join("uploads"),
        generated_dir: root.join("generated"),
        allowed_origins: vec!["http://localhost:3000".to_string()],
    };
    config.init_dirs().unwrap();
    let state = Arc::new(AppState::new(config));
    (docfill_api::app(Arc::clone(&state)), state)
}
