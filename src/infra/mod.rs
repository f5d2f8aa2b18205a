//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для раздачи;
//! - генерация ID партий;
//! - конфигурация движка.

pub mod config;
pub mod ids;
pub mod rng;

pub use config::EngineConfig;
pub use ids::*;
pub use rng::*;
