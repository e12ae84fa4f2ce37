mod harness;

use harness::mock_upstream::MockMessages;
use harness::server::TestServer;

#[tokio::test]
async fn models_route_lists_ids_and_aliases() {
    let mock = MockMessages::start().await.unwrap();
    let server = TestServer::start(&mock.base_url()).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/v1/models"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["object"], "list");

    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect();

    // Canonical ids and their aliases are both listed
    assert!(ids.contains(&"claude-sonnet-4-20250514"));
    assert!(ids.contains(&"sonnet"));
    assert!(ids.contains(&"claude-3-5-haiku-20241022"));
    assert!(ids.contains(&"haiku"));
}
