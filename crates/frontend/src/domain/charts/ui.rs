use contracts::dashboards::portfolio::{CurrencyDistribution, PortfolioChartData};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement};

use super::{currency_distribution_chart, portfolio_chart, ChartConfig};

#[wasm_bindgen]
extern "C" {
    /// Chart.js, loaded globally by the page.
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;
}

const PORTFOLIO_CANVASES: [(&str, &str); 2] = [
    ("portfolioUSDChart", "Portafolio USD"),
    ("portfolioARSChart", "Portafolio ARS"),
];

fn find_canvas(document: &Document, id: &str) -> Option<HtmlCanvasElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// Parse `data-chart-data`, using `fallback` when the attribute is absent.
fn chart_data<T: DeserializeOwned>(canvas: &HtmlCanvasElement, fallback: &str) -> Option<T> {
    let raw = canvas
        .get_attribute("data-chart-data")
        .unwrap_or_else(|| fallback.to_string());
    match serde_json::from_str(&raw) {
        Ok(data) => Some(data),
        Err(e) => {
            log::error!("#{}: invalid chart data: {}", canvas.id(), e);
            None
        }
    }
}

fn render(canvas: &HtmlCanvasElement, config: &ChartConfig) {
    let value = match serde_wasm_bindgen::to_value(config) {
        Ok(value) => value,
        Err(e) => {
            log::error!("#{}: failed to convert chart config: {}", canvas.id(), e);
            return;
        }
    };
    if let Err(e) = Chart::new(canvas, &value) {
        log::error!("#{}: Chart.js failed: {:?}", canvas.id(), e);
    }
}

pub fn init_charts(document: &Document) {
    for (id, title) in PORTFOLIO_CANVASES {
        let Some(canvas) = find_canvas(document, id) else {
            continue;
        };
        if let Some(slices) = chart_data::<PortfolioChartData>(&canvas, "[]") {
            render(&canvas, &portfolio_chart(&slices, title));
        }
    }

    if let Some(canvas) = find_canvas(document, "currencyDistributionChart") {
        if let Some(distribution) = chart_data::<CurrencyDistribution>(&canvas, "{}") {
            render(&canvas, &currency_distribution_chart(&distribution));
        }
    }

    // Dashboard data has no renderer yet; keep it visible for debugging.
    if let Some(canvas) = find_canvas(document, "dashboardChart") {
        if let Some(data) = chart_data::<serde_json::Value>(&canvas, "{}") {
            log::debug!("dashboard chart data: {}", data);
        }
    }
}
