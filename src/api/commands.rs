use serde::{Deserialize, Serialize};

use crate::domain::ContainerType;
use crate::engine::{GameSession, TriggerEvent, TriggerKind, TriggerOutcome};
use crate::infra::rng::{DeterministicRng, SystemRng};

use super::dto::TriggerResultDto;
use super::errors::ApiError;

/// Команда верхнего уровня.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Выполнить начальную раздачу. С seed – воспроизводимо.
    Start { seed: Option<u64> },

    /// Жест игрока.
    Trigger(TriggerCommand),
}

/// Жест игрока во внешнем представлении: контейнеры по именам.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TriggerCommand {
    pub kind: TriggerKind,
    pub source: String,
    /// Куда бросили (для drag).
    pub target: Option<String>,
    /// Сколько верхних карт тащат (для drag).
    pub dragged_count: Option<usize>,
}

impl TriggerCommand {
    /// Превратить в событие движка, проверив имена и размер перетаскивания.
    pub fn to_event(&self, session: &GameSession) -> Result<TriggerEvent, ApiError> {
        let source = ContainerType::new(self.source.as_str());
        let container = session
            .container(&source)
            .ok_or_else(|| ApiError::UnknownContainer(self.source.clone()))?;

        let target = match &self.target {
            Some(name) => {
                let t = ContainerType::new(name.as_str());
                if session.container(&t).is_none() {
                    return Err(ApiError::UnknownContainer(name.clone()));
                }
                Some(t)
            }
            None => None,
        };

        let dragged = match self.dragged_count {
            Some(n) => Some(
                container
                    .top_element(n)
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            ),
            None => None,
        };

        Ok(TriggerEvent {
            kind: self.kind,
            source,
            target,
            dragged,
        })
    }
}

/// Выполнить команду над партией.
pub fn execute_command(session: &mut GameSession, command: &Command) -> Result<TriggerResultDto, ApiError> {
    match command {
        Command::Start { seed } => {
            match seed {
                Some(seed) => session.start(&mut DeterministicRng::from_seed(*seed))?,
                None => session.start(&mut SystemRng)?,
            };
            let automoves = if session.variation().has_automoves() {
                session.run_automoves()?.names().map(str::to_string).collect()
            } else {
                Vec::new()
            };
            Ok(TriggerResultDto {
                applied: None,
                automoves,
            })
        }
        Command::Trigger(cmd) => {
            let event = cmd.to_event(session)?;
            let outcome = session.handle(&event)?;
            Ok(match outcome {
                TriggerOutcome::Applied { applied, automoves } => TriggerResultDto {
                    applied: Some(applied.name),
                    automoves: automoves.names().map(str::to_string).collect(),
                },
                TriggerOutcome::NoMoveApplied => TriggerResultDto {
                    applied: None,
                    automoves: Vec::new(),
                },
            })
        }
    }
}

/// Разобрать команду из JSON.
pub fn parse_command(json: &str) -> Result<Command, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::BadRequest(e.to_string()))
}
