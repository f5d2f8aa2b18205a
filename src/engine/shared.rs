use std::sync::{Arc, RwLock};

use crate::domain::{Card, ContainerType, Containers};
use crate::engine::{EngineError, GameSession, TriggerEvent, TriggerOutcome};

/// Партия, которую читают из другого потока (например, отрисовка).
///
/// Ход целиком выполняется под блокировкой записи, поэтому читатель видит
/// стопки либо до хода, либо после него, но не посередине.
#[derive(Clone, Debug)]
pub struct SharedSession {
    inner: Arc<RwLock<GameSession>>,
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    pub fn handle(&self, event: &TriggerEvent) -> Result<TriggerOutcome, EngineError> {
        let mut session = self
            .inner
            .write()
            .map_err(|_| EngineError::Internal("session lock poisoned"))?;
        session.handle(event)
    }

    /// Содержимое одной стопки.
    pub fn contents(&self, kind: &ContainerType) -> Result<Vec<Card>, EngineError> {
        let session = self
            .inner
            .read()
            .map_err(|_| EngineError::Internal("session lock poisoned"))?;
        Ok(session.containers().require(kind)?.contents().to_vec())
    }

    /// Согласованный снимок всех стопок.
    pub fn snapshot(&self) -> Result<Containers, EngineError> {
        let session = self
            .inner
            .read()
            .map_err(|_| EngineError::Internal("session lock poisoned"))?;
        Ok(session.containers().clone())
    }

    /// Доступ на чтение к партии целиком.
    pub fn with_session<T>(&self, f: impl FnOnce(&GameSession) -> T) -> Result<T, EngineError> {
        let session = self
            .inner
            .read()
            .map_err(|_| EngineError::Internal("session lock poisoned"))?;
        Ok(f(&session))
    }
}
