//! Движок пасьянса: ограничения, ходы, реестр правил, раздача, автоходы.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `start` – выполнить начальную раздачу
//!   - `handle` – обработать жест игрока (press / click / drag)
//!   - `run_automoves` – довести автоходы до неподвижной точки

pub mod automove;
pub mod constraint;
pub mod deal;
pub mod errors;
pub mod game_loop;
pub mod history;
pub mod moves;
pub mod rules;
pub mod session_manager;
pub mod shared;
pub mod trigger;

pub use automove::{AutoMoveReport, AutoMoveResolver, ResolverState};
pub use constraint::{Constraint, CustomPredicate, MoveComponent, MoveContext, Predicate};
pub use deal::{Deal, DealReport, DealStep};
pub use errors::EngineError;
pub use game_loop::GameSession;
pub use history::{GameEvent, GameEventKind, GameHistory};
pub use moves::{AppliedMove, Move, MoveKind};
pub use rules::Rules;
pub use session_manager::{ManagerError, SessionManager};
pub use shared::SharedSession;
pub use trigger::{TriggerEvent, TriggerKind, TriggerOutcome};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
