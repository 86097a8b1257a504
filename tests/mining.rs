mod common;

use httpmock::Method::GET;

#[tokio::test]
async fn mining_equipment_takes_no_parameters() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/data/miningequipment");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("miningequipment", "all"));
    });

    let client = common::client_for(&server);
    let doc = client.mining_equipment().await.unwrap();

    mock.assert();
    assert_eq!(doc["MiningData"]["23575"]["Name"], "AntMiner S9");
}
