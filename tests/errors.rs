mod common;

use httpmock::Method::GET;
use cryptocompare_rs::{CcClient, CcError, Params, ServiceStatus};
use url::Url;

#[tokio::test]
async fn non_json_body_is_a_parse_error_carrying_the_url() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/data/price");
        then.status(200).body("not json");
    });

    let client = common::client_for(&server);
    let err = client
        .price("ETH", "BTC", &Params::new())
        .await
        .unwrap_err();

    match err {
        CcError::Json { url, .. } => assert!(url.contains("/data/price?fsym=ETH&tsyms=BTC")),
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error_not_a_document() {
    // Nothing listens on port 9 (discard); the connection attempt fails
    // before any body exists to parse.
    let client = CcClient::builder()
        .base_min(Url::parse("http://127.0.0.1:9/data/").unwrap())
        .build()
        .unwrap();

    let err = client
        .price("ETH", "BTC", &Params::new())
        .await
        .unwrap_err();

    match err {
        CcError::Transport { url, .. } => assert!(url.starts_with("http://127.0.0.1:9/data/price")),
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn service_level_errors_still_resolve_and_classify_at_the_caller() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/data/histoday");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("price", "PLOP_error"));
    });

    let client = common::client_for(&server);
    let doc = client
        .histo_day("PLOP", "USD", &Params::new())
        .await
        .expect("a service error is a valid document, not a fetch failure");

    let status = ServiceStatus::from_document(&doc);
    assert!(status.is_error());
    assert!(status.message().unwrap().contains("no data for the symbol"));
}

#[tokio::test]
async fn default_user_agent_identifies_the_client() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data/all/coinlist")
            .header("user-agent", "Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10.4; en-US; rv:1.9.2.2) Gecko/20100316 Firefox/3.6.2");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"Response": "Success", "Data": {}}"#);
    });

    let client = common::client_for(&server);
    client.coin_list().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn user_agent_can_be_overridden_on_the_builder() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data/all/coinlist")
            .header("user-agent", "my-app/1.0");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"Response": "Success", "Data": {}}"#);
    });

    let client = CcClient::builder()
        .user_agent("my-app/1.0")
        .base_min(Url::parse(&format!("{}/data/", server.base_url())).unwrap())
        .build()
        .unwrap();
    client.coin_list().await.unwrap();

    mock.assert();
}
