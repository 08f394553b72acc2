//! Chart data embedded by the server into `data-chart-data` attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One slice of a portfolio composition chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
}

/// Portfolio composition for a single currency (`[{label, value}, ...]`).
pub type PortfolioChartData = Vec<ChartSlice>;

/// Amount per currency, e.g. `{"USD": 1500.0, "ARS": 320000.0}`.
///
/// Keys keep the order of the embedded JSON when `serde_json` is built with
/// `preserve_order`; non-numeric values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyDistribution(pub Map<String, Value>);

impl CurrencyDistribution {
    pub fn entries(&self) -> Vec<(String, f64)> {
        self.0
            .iter()
            .filter_map(|(currency, amount)| amount.as_f64().map(|v| (currency.clone(), v)))
            .collect()
    }
}
