use serde::{Deserialize, Serialize};

use crate::domain::{ContainerType, Element};
use crate::engine::automove::AutoMoveReport;
use crate::engine::moves::AppliedMove;

/// Тип пользовательского жеста. По нему же разложены списки ходов в `Rules`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Press,
    Click,
    Drag,
}

impl TriggerKind {
    pub const ALL: [TriggerKind; 3] = [TriggerKind::Press, TriggerKind::Click, TriggerKind::Drag];
}

/// Уже распознанный жест от слоя ввода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TriggerEvent {
    pub kind: TriggerKind,
    pub source: ContainerType,
    /// Куда бросили (только для drag).
    pub target: Option<ContainerType>,
    /// Что тащили (только для drag). Без него берётся элемент по форме хода.
    pub dragged: Option<Element>,
}

impl TriggerEvent {
    pub fn press(source: impl Into<ContainerType>) -> Self {
        Self {
            kind: TriggerKind::Press,
            source: source.into(),
            target: None,
            dragged: None,
        }
    }

    pub fn click(source: impl Into<ContainerType>) -> Self {
        Self {
            kind: TriggerKind::Click,
            ..Self::press(source)
        }
    }

    pub fn drag(
        source: impl Into<ContainerType>,
        target: impl Into<ContainerType>,
        dragged: Option<Element>,
    ) -> Self {
        Self {
            kind: TriggerKind::Drag,
            source: source.into(),
            target: Some(target.into()),
            dragged,
        }
    }
}

/// Результат обработки жеста.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum TriggerOutcome {
    /// Ход выполнен; `automoves`: что доиграл резолвер после него.
    Applied {
        applied: AppliedMove,
        automoves: AutoMoveReport,
    },
    /// Ни один ход не подошёл. Для UI это подсказка, а не ошибка.
    NoMoveApplied,
}

impl TriggerOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TriggerOutcome::Applied { .. })
    }

    pub fn applied(&self) -> Option<&AppliedMove> {
        match self {
            TriggerOutcome::Applied { applied, .. } => Some(applied),
            TriggerOutcome::NoMoveApplied => None,
        }
    }
}
