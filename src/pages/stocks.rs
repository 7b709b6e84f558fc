//! Stock markets page view-model.
//!
//! The one page with a paired fetch: quote and daily time series are requested
//! concurrently and the load settles only after both have. Either failing
//! fails the whole transition; a quote is never rendered with a silently
//! missing chart.

use crate::client::FinanceClient;
use crate::domain::stock::{StockQuote, TimeSeriesPoint};
use crate::resource::Resource;
use crate::shared::Symbol;

const FETCH_FALLBACK: &str = "Failed to fetch stock data";
const DEFAULT_SYMBOL: &str = "AAPL";

/// Joint payload for one stock load: snapshot plus chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct StockData {
    pub quote: StockQuote,
    /// Chronological (oldest first), ready for a chart x-axis. Reversed from
    /// the server's newest-first order at load time.
    pub series: Vec<TimeSeriesPoint>,
}

/// View-model for the stock markets page: search input, active symbol, and the
/// paired quote + series resource.
#[derive(Debug, Clone)]
pub struct StockMarketsView {
    input: String,
    symbol: Symbol,
    data: Resource<StockData>,
}

impl Default for StockMarketsView {
    fn default() -> Self {
        let symbol = Symbol::parse(DEFAULT_SYMBOL).expect("default symbol is non-empty");
        Self {
            input: DEFAULT_SYMBOL.to_string(),
            symbol,
            data: Resource::new(),
        }
    }
}

impl StockMarketsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The symbol of the most recently issued load.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn data(&self) -> &Resource<StockData> {
        &self.data
    }

    /// Mirror of the search text field.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Submit the search field (Enter key or button). Blank input is a no-op;
    /// otherwise the trimmed, upper-cased symbol becomes active and a load is
    /// issued.
    pub async fn submit_search(&mut self, client: &FinanceClient) {
        let Some(symbol) = Symbol::parse(&self.input) else {
            return;
        };
        self.symbol = symbol;
        self.load(client).await;
    }

    /// Fetch quote and time series concurrently and settle the resource.
    ///
    /// Both requests always run to completion; if either fails, the composite
    /// result is that failure and the resource transitions to `Failed`.
    pub async fn load(&mut self, client: &FinanceClient) {
        let ticket = self.data.begin();
        tracing::debug!(symbol = %self.symbol, "loading stock page");

        let stocks = client.stocks();
        let (quote, series) = tokio::join!(
            stocks.quote(&self.symbol),
            stocks.time_series(&self.symbol),
        );

        let result = quote.and_then(|quote| {
            series.map(|mut series| {
                series.reverse();
                StockData { quote, series }
            })
        });
        self.data.complete(ticket, result, FETCH_FALLBACK);
    }
}
