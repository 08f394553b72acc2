//! Doughnut charts built from JSON the server embeds in `data-chart-data`.
//!
//! Configs are plain `serde` structs in Chart.js shape; `ui` hands them to the
//! global `Chart` constructor.

pub mod ui;

use contracts::dashboards::portfolio::{ChartSlice, CurrencyDistribution};
use serde::Serialize;

pub const PORTFOLIO_PALETTE: [&str; 7] = [
    "#007bff", "#28a745", "#ffc107", "#dc3545", "#6c757d", "#17a2b8", "#fd7e14",
];
pub const CURRENCY_PALETTE: [&str; 2] = ["#007bff", "#28a745"];
pub const CURRENCY_DISTRIBUTION_TITLE: &str = "Distribución por Moneda (Activas)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<f64>,
    pub background_color: Vec<&'static str>,
    pub border_width: u32,
    pub border_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub padding: u32,
    pub use_point_style: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    pub weight: &'static str,
}

fn doughnut(
    labels: Vec<String>,
    values: Vec<f64>,
    palette: &[&'static str],
    legend_labels: Option<LegendLabels>,
    title: &str,
) -> ChartConfig {
    ChartConfig {
        kind: "doughnut",
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                data: values,
                background_color: palette.to_vec(),
                border_width: 2,
                border_color: "#fff",
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    position: "bottom",
                    labels: legend_labels,
                },
                title: Title {
                    display: true,
                    text: title.to_string(),
                    font: Font {
                        size: 16,
                        weight: "bold",
                    },
                },
            },
        },
    }
}

/// Portfolio composition for one currency.
pub fn portfolio_chart(slices: &[ChartSlice], title: &str) -> ChartConfig {
    doughnut(
        slices.iter().map(|s| s.label.clone()).collect(),
        slices.iter().map(|s| s.value).collect(),
        &PORTFOLIO_PALETTE,
        Some(LegendLabels {
            padding: 20,
            use_point_style: true,
        }),
        title,
    )
}

/// Share of active investments per currency.
pub fn currency_distribution_chart(distribution: &CurrencyDistribution) -> ChartConfig {
    let (labels, values): (Vec<String>, Vec<f64>) = distribution.entries().into_iter().unzip();
    doughnut(
        labels,
        values,
        &CURRENCY_PALETTE,
        None,
        CURRENCY_DISTRIBUTION_TITLE,
    )
}
