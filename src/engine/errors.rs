use crate::domain::ContainerType;
use crate::engine::trigger::TriggerKind;

use thiserror::Error;

/// Ошибки движка пасьянса.
///
/// Недопустимый жест игрока ошибкой не считается, он возвращается
/// как `TriggerOutcome::NoMoveApplied`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Контейнер {0} уже зарегистрирован")]
    DuplicateContainer(ContainerType),

    #[error("Контейнер {0} не найден")]
    UnknownContainer(ContainerType),

    #[error("Ход {name} уже есть в списке {trigger:?}")]
    DuplicateMove { trigger: TriggerKind, name: String },

    #[error("Ход {name} не найден в списке {trigger:?}")]
    MoveNotFound { trigger: TriggerKind, name: String },

    #[error("Ход {name} объявлен некорректно: {reason}")]
    MalformedMove { name: String, reason: String },

    #[error("Некорректная раздача: {0}")]
    MalformedDeal(String),

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),

    #[error("Недостаточно карт: нужно {needed}, есть {available}")]
    InsufficientCards { needed: usize, available: usize },

    #[error("Ни одна цель не принимает элемент")]
    NoLegalTarget,

    #[error("Нарушен инвариант: {0}")]
    InvariantViolation(String),

    #[error("Автоходы не сошлись за {0} применений")]
    AutoMoveLimitExceeded(usize),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Ошибка описания вариации: фатальна на этапе сборки.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EngineError::DuplicateContainer(_)
                | EngineError::UnknownContainer(_)
                | EngineError::DuplicateMove { .. }
                | EngineError::MoveNotFound { .. }
                | EngineError::MalformedMove { .. }
                | EngineError::MalformedDeal(_)
                | EngineError::InvalidConfig(_)
                | EngineError::AutoMoveLimitExceeded(_)
        )
    }

    /// Условие, которое на пользовательском ходе превращается в no-op.
    pub(crate) fn is_rejection(&self) -> bool {
        matches!(
            self,
            EngineError::InsufficientCards { .. } | EngineError::NoLegalTarget
        )
    }
}
