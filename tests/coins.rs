mod common;

use httpmock::Method::GET;

#[tokio::test]
async fn coin_list_is_served_from_the_min_api_root() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/data/all/coinlist");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("coinlist", "all"));
    });

    let client = common::client_for(&server);
    let doc = client.coin_list().await.unwrap();

    mock.assert();
    assert_eq!(doc["Response"], "Success");
    assert_eq!(doc["Data"]["BTC"]["CoinName"], "Bitcoin");
    assert_eq!(doc["Data"]["ETH"]["Id"], "7605");
}

#[tokio::test]
async fn coin_snapshot_is_served_from_the_legacy_site_root() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/data/coinsnapshot")
            .query_param("fsym", "BTC")
            .query_param("tsym", "USD");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("coinsnapshot", "BTC"));
    });

    let client = common::client_for(&server);
    let doc = client.coin_snapshot("BTC", "USD").await.unwrap();

    mock.assert();
    assert_eq!(doc["Data"]["AggregatedData"]["MARKET"], "CCCAGG");
    assert_eq!(doc["Data"]["Exchanges"][0]["MARKET"], "Coinbase");
}

#[tokio::test]
async fn coin_snapshot_full_by_id_renders_the_id_in_base_10() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/data/coinsnapshotfullbyid")
            .query_param("id", "1182");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"Response": "Success", "Data": {"General": {"Id": "1182", "Name": "BTC"}}}"#);
    });

    let client = common::client_for(&server);
    let doc = client.coin_snapshot_full_by_id(1182).await.unwrap();

    mock.assert();
    assert_eq!(doc["Data"]["General"]["Name"], "BTC");
}
