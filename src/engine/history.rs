use serde::{Deserialize, Serialize};

use crate::domain::ContainerType;
use crate::engine::deal::DealReport;
use crate::engine::moves::AppliedMove;
use crate::engine::trigger::TriggerKind;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Начальная раздача выполнена.
    Dealt { variation: String, report: DealReport },

    /// Ход по жесту игрока.
    MoveApplied(AppliedMove),

    /// Ход, применённый резолвером автоходов.
    AutoMoveApplied(AppliedMove),

    /// Жест, под который не подошёл ни один ход.
    NoMoveApplied {
        trigger: TriggerKind,
        source: ContainerType,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Сколько ходов было применено (вручную и автоматически).
    pub fn applied_moves(&self) -> usize {
        self.events
            .iter()
            .filter(|e| {
                matches!(
                    e.kind,
                    GameEventKind::MoveApplied(_) | GameEventKind::AutoMoveApplied(_)
                )
            })
            .count()
    }
}
