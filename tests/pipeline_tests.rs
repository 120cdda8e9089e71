//! End-to-end lookups through the public API of the crate

use market_price::{run, ClientConfig, MarketClient, MarketError, Outcome, Quote};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn lookup_all_sells_hidden() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items/loki_prime_set/orders"))
        .and(header("user-agent", "simple-script"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "payload": {
                "orders": [
                    { "platinum": 80, "order_type": "sell", "visible": false, "quantity": 1 },
                    { "platinum": 75, "order_type": "sell", "visible": false, "quantity": 2 },
                    { "platinum": 60, "order_type": "buy", "visible": true, "quantity": 1 }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/v1/", server.uri());
    let (outcome, stdout) = tokio::task::spawn_blocking(move || {
        let client = MarketClient::new(ClientConfig::default().with_base_url(base_url)).unwrap();
        let mut input: &[u8] = b"Loki Prime Set\n";
        let mut output = Vec::new();
        let outcome = run(&client, &[], &mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    })
    .await
    .unwrap();

    assert_eq!(
        outcome,
        Outcome::Quoted(Quote {
            lowest_sell: None,
            highest_buy: Some(60),
        })
    );
    assert!(stdout.ends_with("The highest_buy is: 60\nNo lowest_sell\n"));
}

#[test]
fn lookup_unreachable_host_is_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client =
        MarketClient::new(ClientConfig::default().with_base_url(format!("http://127.0.0.1:{port}")))
            .unwrap();
    let mut input: &[u8] = b"";
    let mut output = Vec::new();

    let result = run(&client, &["Ash Prime Set".to_string()], &mut input, &mut output);
    assert!(matches!(result, Err(MarketError::Network(_))));
    assert!(output.is_empty());
}
