//! Envelope contract and page lifecycle tests against a live mock backend.
//!
//! Each test starts an axum server on a random port serving canned FinanceHub
//! envelopes, then exercises the client and view-models over real HTTP.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use financehub_sdk::prelude::*;

/// Serve `router` on a random local port and return the base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    format!("http://{addr}")
}

async fn client_for(router: Router) -> FinanceClient {
    let base_url = serve(router).await;
    FinanceClient::builder()
        .base_url(&base_url)
        .build()
        .expect("build client")
}

fn ok_envelope(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

fn topic_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Banking",
        "description": "How banks work",
        "summary": "Deposits, loans, and payments.",
        "keywords": ["deposits", "loans", "interest"],
        "resources": ["https://example.com/banking"]
    })
}

fn quote_json(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "price": 189.43,
        "change": 1.12,
        "changePercent": 0.59,
        "volume": 48210000i64,
        "high": 190.1,
        "low": 187.6,
        "open": 188.0,
        "previousClose": 188.31,
        "lastUpdated": "2024-01-05T21:00:00Z"
    })
}

fn series_point(date: &str, close: f64) -> Value {
    json!({
        "date": date,
        "open": close - 1.0,
        "high": close + 1.0,
        "low": close - 2.0,
        "close": close,
        "volume": 1000000i64
    })
}

fn crypto_json(id: &str, rank: i64) -> Value {
    json!({
        "id": id,
        "symbol": id.chars().take(3).collect::<String>(),
        "name": id,
        "currentPrice": 42000.0 / rank as f64,
        "marketCap": 1.0e12 / rank as f64,
        "marketCapRank": rank,
        "priceChange24h": -120.5,
        "priceChangePercent24h": -0.3,
        "high24h": 43000.0,
        "low24h": 41000.0,
        "circulatingSupply": 19000000.0,
        "lastUpdated": "2024-01-05T21:00:00Z"
    })
}

// ── Envelope contract ────────────────────────────────────────────────────────

#[tokio::test]
async fn topic_by_id_decodes_entity() {
    let router = Router::new().route(
        "/api/topics/{id}",
        get(|Path(id): Path<String>| async move { ok_envelope(topic_json(&id)) }),
    );
    let client = client_for(router).await;

    let topic = client.topics().get("banking").await.expect("topic");
    assert_eq!(topic.id, "banking");
    assert_eq!(topic.title, "Banking");
    // Server-provided order is preserved for display.
    assert_eq!(topic.keywords, vec!["deposits", "loans", "interest"]);
    assert_eq!(topic.resources, vec!["https://example.com/banking"]);
}

#[tokio::test]
async fn all_topics_decodes_list() {
    let router = Router::new().route(
        "/api/topics",
        get(|| async { ok_envelope(json!([topic_json("banking"), topic_json("bonds")])) }),
    );
    let client = client_for(router).await;

    let topics = client.topics().all().await.expect("topics");
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[1].id, "bonds");
}

#[tokio::test]
async fn singular_without_data_is_not_found() {
    // 2xx with a bare envelope: payload absence itself signals not-found.
    let router = Router::new().route(
        "/api/topics/{id}",
        get(|| async { Json(json!({ "success": true })) }),
    );
    let client = client_for(router).await;

    let err = client.topics().get("xyz").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(err.to_string(), "Topic not found");
}

#[tokio::test]
async fn collection_without_data_is_empty() {
    let router = Router::new().route(
        "/api/crypto/top",
        get(|| async { Json(json!({ "success": true })) }),
    );
    let client = client_for(router).await;

    let cryptos = client.cryptos().top().await.expect("empty listing");
    assert!(cryptos.is_empty());
}

#[tokio::test]
async fn crypto_listing_preserves_server_order() {
    let router = Router::new().route(
        "/api/crypto/top",
        get(|| async {
            ok_envelope(json!([
                crypto_json("bitcoin", 1),
                crypto_json("ethereum", 2),
                crypto_json("tether", 3),
            ]))
        }),
    );
    let client = client_for(router).await;

    let cryptos = client.cryptos().top().await.expect("listing");
    let ids: Vec<&str> = cryptos.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["bitcoin", "ethereum", "tether"]);
    assert_eq!(cryptos[0].market_cap_rank, 1);
}

#[tokio::test]
async fn crypto_by_id_not_found_message() {
    let router = Router::new().route(
        "/api/crypto/{id}",
        get(|| async { Json(json!({ "success": true })) }),
    );
    let client = client_for(router).await;

    let err = client.cryptos().get("dogecoin").await.unwrap_err();
    assert_eq!(err.to_string(), "Crypto data not found");
}

#[tokio::test]
async fn http_404_with_envelope_is_not_found() {
    // The envelope stays the source of truth even on a 404 status.
    let router = Router::new().route(
        "/api/topics/{id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "success": false, "error": "Topic not found" })),
            )
        }),
    );
    let client = client_for(router).await;

    let err = client.topics().get("nope").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound("Topic not found")));
}

#[tokio::test]
async fn server_error_surfaces_envelope_message() {
    let router = Router::new().route(
        "/api/stocks/{symbol}",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "upstream quota exhausted" })),
            )
        }),
    );
    let client = client_for(router).await;

    let symbol = Symbol::parse("AAPL").unwrap();
    let err = client.stocks().quote(&symbol).await.unwrap_err();
    match err {
        ClientError::Server { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream quota exhausted");
        }
        other => panic!("expected Server error, got {other}"),
    }
}

#[tokio::test]
async fn currency_rate_decodes_and_not_found() {
    let router = Router::new().route(
        "/api/currency/{from}/{to}",
        get(|Path((from, to)): Path<(String, String)>| async move {
            if from == "USD" {
                ok_envelope(json!({
                    "fromCurrency": from,
                    "toCurrency": to,
                    "rate": 0.92,
                    "bid": 0.9195,
                    "ask": 0.9205,
                    "lastUpdated": "2024-01-05T21:00:00Z"
                }))
            } else {
                Json(json!({ "success": true }))
            }
        }),
    );
    let client = client_for(router).await;

    let rate = client.currencies().rate("USD", "EUR").await.expect("rate");
    assert_eq!(rate.from_currency, "USD");
    assert_eq!(rate.rate, 0.92);

    let err = client.currencies().rate("XXX", "EUR").await.unwrap_err();
    assert_eq!(err.to_string(), "Currency rate not found");
}

#[tokio::test]
async fn time_series_keeps_server_order_at_client_level() {
    let router = Router::new().route(
        "/api/stocks/{symbol}/timeseries",
        get(|| async {
            ok_envelope(json!([
                series_point("2024-01-03", 103.0),
                series_point("2024-01-02", 102.0),
                series_point("2024-01-01", 101.0),
            ]))
        }),
    );
    let client = client_for(router).await;

    let symbol = Symbol::parse("AAPL").unwrap();
    let series = client.stocks().time_series(&symbol).await.expect("series");
    let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
    // Client returns server order (newest first); reordering is the page's job.
    assert_eq!(dates, vec!["2024-01-03", "2024-01-02", "2024-01-01"]);
}

// ── Stock page lifecycle ─────────────────────────────────────────────────────

fn stock_router() -> Router {
    Router::new()
        .route(
            "/api/stocks/{symbol}",
            get(|Path(symbol): Path<String>| async move { ok_envelope(quote_json(&symbol)) }),
        )
        .route(
            "/api/stocks/{symbol}/timeseries",
            get(|| async {
                ok_envelope(json!([
                    series_point("2024-01-03", 103.0),
                    series_point("2024-01-02", 102.0),
                    series_point("2024-01-01", 101.0),
                ]))
            }),
        )
}

#[tokio::test]
async fn stock_view_reverses_series_to_chronological() {
    let client = client_for(stock_router()).await;
    let mut view = StockMarketsView::new();

    view.load(&client).await;

    assert_eq!(view.data().status(), Status::Ready);
    let data = view.data().value().expect("stock data");
    assert_eq!(data.quote.symbol, "AAPL");
    let dates: Vec<&str> = data.series.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
}

#[tokio::test]
async fn stock_view_joint_failure_when_series_fails() {
    let router = Router::new()
        .route(
            "/api/stocks/{symbol}",
            get(|Path(symbol): Path<String>| async move { ok_envelope(quote_json(&symbol)) }),
        )
        .route(
            "/api/stocks/{symbol}/timeseries",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "timeseries backend down" })),
                )
            }),
        );
    let client = client_for(router).await;
    let mut view = StockMarketsView::new();

    view.load(&client).await;

    // The quote alone never renders; either fetch failing fails the load.
    assert_eq!(view.data().status(), Status::Failed);
    assert!(view.data().value().is_none());
    let error = view.data().error().expect("error message");
    assert!(error.contains("timeseries backend down"), "got: {error}");
}

#[tokio::test]
async fn stock_view_failure_keeps_stale_data() {
    let good = client_for(stock_router()).await;
    let bad = client_for(Router::new()).await; // every route 404s without an envelope

    let mut view = StockMarketsView::new();
    view.load(&good).await;
    assert_eq!(view.data().status(), Status::Ready);

    view.load(&bad).await;
    assert_eq!(view.data().status(), Status::Failed);
    assert!(view.data().error().is_some());
    // Prior data stays for rendering beneath the error banner.
    let data = view.data().value().expect("stale data retained");
    assert_eq!(data.quote.symbol, "AAPL");
}

#[tokio::test]
async fn search_uppercases_and_replaces_state() {
    let client = client_for(stock_router()).await;
    let mut view = StockMarketsView::new();

    view.load(&client).await;
    assert_eq!(view.data().value().unwrap().quote.symbol, "AAPL");

    view.set_input(" msft ");
    view.submit_search(&client).await;

    assert_eq!(view.symbol().as_str(), "MSFT");
    assert_eq!(view.data().status(), Status::Ready);
    assert_eq!(view.data().value().unwrap().quote.symbol, "MSFT");
}

#[tokio::test]
async fn blank_search_is_a_noop() {
    let client = client_for(stock_router()).await;
    let mut view = StockMarketsView::new();

    view.load(&client).await;
    view.set_input("   ");
    view.submit_search(&client).await;

    // No request issued: symbol and state unchanged.
    assert_eq!(view.symbol().as_str(), "AAPL");
    assert_eq!(view.data().status(), Status::Ready);
    assert_eq!(view.data().value().unwrap().quote.symbol, "AAPL");
}

// ── Topic / crypto page lifecycle ────────────────────────────────────────────

#[tokio::test]
async fn topic_view_loads_and_rekeys() {
    let router = Router::new().route(
        "/api/topics/{id}",
        get(|Path(id): Path<String>| async move { ok_envelope(topic_json(&id)) }),
    );
    let client = client_for(router).await;

    let mut view = TopicView::new("banking");
    view.load(&client).await;
    assert_eq!(view.topic().status(), Status::Ready);
    assert_eq!(view.topic().value().unwrap().id, "banking");

    view.set_topic_id("bonds");
    view.load(&client).await;
    assert_eq!(view.topic().value().unwrap().id, "bonds");
}

#[tokio::test]
async fn crypto_view_failure_sets_error_banner() {
    let router = Router::new().route(
        "/api/crypto/top",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "coingecko unreachable" })),
            )
        }),
    );
    let client = client_for(router).await;

    let mut view = CryptoListView::new();
    view.load(&client).await;

    assert_eq!(view.cryptos().status(), Status::Failed);
    assert!(view
        .cryptos()
        .error()
        .expect("error message")
        .contains("coingecko unreachable"));
}
