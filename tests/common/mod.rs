//! Common test utilities for the NEO dictionary tests
//!
//! Fixtures are GOLR `select` responses captured for a CURIE lookup
//! (`id.json`) and a string search for "melanoma" (`melanoma.json`).

#![allow(dead_code)]

use mockito::{Mock, Server};
use serde_json::Value;
use std::path::PathBuf;
use vsm_dictionary_neo::{NeoConfig, NeoConfigBuilder};

/// Solr path the adapter appends its parameters to
pub const SOLR_PATH: &str = "/solr/select?fq=document_category:bioentity&q=%2A%3A%2A";

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Raw fixture text
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

pub fn fixture_json(name: &str) -> Value {
    serde_json::from_str(&fixture(name)).expect("fixture is valid JSON")
}

/// Config pointing at a mock GOLR server
pub fn config_for(server: &Server, optimap: bool) -> NeoConfig {
    NeoConfigBuilder::new()
        .base_url(format!("{}{}", server.url(), SOLR_PATH))
        .optimap(optimap)
        .log(true)
        .build()
}

/// Mock answering any GET on the Solr select path
pub async fn mock_select(server: &mut Server, status: usize, body: &str) -> Mock {
    server
        .mock("GET", mockito::Matcher::Regex(r"^/solr/select".to_string()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
