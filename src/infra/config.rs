use serde::{Deserialize, Serialize};

use crate::domain::Geometry;
use crate::engine::EngineError;

/// Настройки движка. Все поля необязательны в JSON: недостающие берутся по умолчанию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Сколько автоходов допускается за один запуск резолвера.
    pub automove_limit: usize,
    /// Геометрия карт для раскладки.
    pub geometry: Geometry,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            automove_limit: 1000,
            geometry: Geometry::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.automove_limit == 0 {
            return Err(EngineError::InvalidConfig("automove_limit must be positive".into()));
        }
        let g = &self.geometry;
        if g.card_width == 0 || g.card_height == 0 {
            return Err(EngineError::InvalidConfig("card size must be positive".into()));
        }
        Ok(())
    }
}
