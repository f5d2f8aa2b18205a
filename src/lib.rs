//! Движок правил пасьянсов.
//!
//! Вариация описывается декларативно: контейнеры, шаги раздачи, ходы
//! с ограничениями по типам жестов и флаг автоходов. Движок разрешает
//! жесты игрока в ходы, атомарно переносит карты и доводит автоходы
//! до неподвижной точки.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod variation;
