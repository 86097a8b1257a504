#![allow(dead_code)]

use httpmock::MockServer;
use std::{fs, path::Path};
use url::Url;

use cryptocompare_rs::CcClient;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{key}.json");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client with both service roots pointed at the mock server: min-api under
/// `/data/`, the legacy site under `/api/data/`.
pub fn client_for(server: &MockServer) -> CcClient {
    CcClient::builder()
        .base_min(Url::parse(&format!("{}/data/", server.base_url())).unwrap())
        .base_site(Url::parse(&format!("{}/api/data/", server.base_url())).unwrap())
        .build()
        .unwrap()
}
