// src/engine/session_manager.rs

use std::collections::HashMap;

use crate::domain::Deck;
use crate::engine::{DealReport, EngineError, GameSession, RandomSource, TriggerEvent, TriggerOutcome};
use crate::infra::config::EngineConfig;
use crate::infra::ids::{IdGenerator, SessionId};
use crate::variation::Variation;

/// Ошибки уровня менеджера партий (над движком одной партии).
#[derive(Debug)]
pub enum ManagerError {
    /// Партия с таким ID не найдена.
    SessionNotFound(SessionId),

    /// Проброшенная ошибка из движка (EngineError).
    Engine(EngineError),
}

impl From<EngineError> for ManagerError {
    fn from(e: EngineError) -> Self {
        ManagerError::Engine(e)
    }
}

/// Менеджер партий:
/// - хранит несколько независимых партий по SessionId;
/// - у каждой партии свои стопки, правила и раздача: общего изменяемого состояния нет;
/// - даёт методы start/handle поверх GameSession.
pub struct SessionManager {
    config: EngineConfig,
    ids: IdGenerator,
    sessions: HashMap<SessionId, GameSession>,
}

impl SessionManager {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ids: IdGenerator::new(),
            sessions: HashMap::new(),
        }
    }

    /// Открыть партию на своей копии вариации.
    pub fn open_session(&mut self, variation: Variation) -> SessionId {
        let id = self.ids.next_session_id();
        self.sessions
            .insert(id, GameSession::new(variation, &self.config));
        id
    }

    pub fn close_session(&mut self, id: SessionId) -> Option<GameSession> {
        self.sessions.remove(&id)
    }

    pub fn has_session(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn session(&self, id: SessionId) -> Option<&GameSession> {
        self.sessions.get(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn session_mut(&mut self, id: SessionId) -> Result<&mut GameSession, ManagerError> {
        self.sessions
            .get_mut(&id)
            .ok_or(ManagerError::SessionNotFound(id))
    }

    pub fn start<R: RandomSource>(&mut self, id: SessionId, rng: &mut R) -> Result<DealReport, ManagerError> {
        Ok(self.session_mut(id)?.start(rng)?)
    }

    pub fn start_with_deck(&mut self, id: SessionId, deck: Deck) -> Result<DealReport, ManagerError> {
        Ok(self.session_mut(id)?.start_with_deck(deck)?)
    }

    /// Обработать жест в конкретной партии.
    pub fn handle(&mut self, id: SessionId, event: &TriggerEvent) -> Result<TriggerOutcome, ManagerError> {
        Ok(self.session_mut(id)?.handle(event)?)
    }
}
