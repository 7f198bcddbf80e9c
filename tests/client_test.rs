//! HTTP client tests against a mock server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinwatch::CoinwatchError;
use coinwatch::client::MarketClient;

const MARKETS_JSON: &str = include_str!("fixtures/markets.json");
const COIN_JSON: &str = include_str!("fixtures/coin.json");
const MARKET_CHART_JSON: &str = include_str!("fixtures/market_chart.json");

#[tokio::test]
async fn fetch_cryptos_parses_market_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/markets"))
        .and(query_param("vs_currency", "usd"))
        .and(query_param("order", "market_cap_desc"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .and(query_param("sparkline", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(MARKETS_JSON, "application/json"))
        .mount(&server)
        .await;

    let client = MarketClient::with_base_url(server.uri());
    let coins = client.fetch_cryptos().await.expect("fetch should succeed");

    assert_eq!(coins.len(), 3);
    assert_eq!(coins[0].id, "bitcoin");
}

#[tokio::test]
async fn fetch_coin_data_parses_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin"))
        .and(query_param("localization", "false"))
        .and(query_param("market_data", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(COIN_JSON, "application/json"))
        .mount(&server)
        .await;

    let client = MarketClient::with_base_url(server.uri());
    let detail = client
        .fetch_coin_data("bitcoin")
        .await
        .expect("fetch should succeed");

    assert_eq!(detail.id, "bitcoin");
    assert!(detail.market_data.price_usd().is_some());
}

#[tokio::test]
async fn fetch_chart_data_parses_series() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .and(query_param("vs_currency", "usd"))
        .and(query_param("days", "7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(MARKET_CHART_JSON, "application/json"),
        )
        .mount(&server)
        .await;

    let client = MarketClient::with_base_url(server.uri());
    let series = client
        .fetch_chart_data("bitcoin")
        .await
        .expect("fetch should succeed");

    assert_eq!(series.prices.len(), 6);
}

#[tokio::test]
async fn server_error_surfaces_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = MarketClient::with_base_url(server.uri());
    let err = client
        .fetch_cryptos()
        .await
        .expect_err("fetch should fail on 500");

    assert!(matches!(err, CoinwatchError::Http(_)));
}

#[tokio::test]
async fn not_found_surfaces_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = MarketClient::with_base_url(server.uri());
    let err = client
        .fetch_coin_data("nope")
        .await
        .expect_err("fetch should fail on 404");

    assert!(matches!(err, CoinwatchError::Http(_)));
}
