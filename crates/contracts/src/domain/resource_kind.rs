use serde::{Deserialize, Serialize};

/// Тип сущности, которую можно включать/выключать через отдельный endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Investment,
    Organism,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Investment => "investment",
            ResourceKind::Organism => "organism",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "investment" => Ok(ResourceKind::Investment),
            "organism" => Ok(ResourceKind::Organism),
            _ => Err(format!("Unknown resource kind: {}", s)),
        }
    }

    pub fn all() -> [ResourceKind; 2] {
        [ResourceKind::Investment, ResourceKind::Organism]
    }

    /// Путь переключения состояния: `/toggle_{kind}/{id}`.
    ///
    /// `id` вставляется как есть, экранирование — забота вызывающего.
    pub fn toggle_path(&self, id: &str) -> String {
        format!("/toggle_{}/{}", self.as_str(), id)
    }
}
