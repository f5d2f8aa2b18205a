use std::collections::HashSet;

use log::{debug, info, warn};

use crate::domain::{Container, ContainerType, Containers, Deck};
use crate::engine::automove::{AutoMoveReport, AutoMoveResolver};
use crate::engine::deal::DealReport;
use crate::engine::errors::EngineError;
use crate::engine::history::{GameEventKind, GameHistory};
use crate::engine::trigger::{TriggerEvent, TriggerKind, TriggerOutcome};
use crate::engine::RandomSource;
use crate::infra::config::EngineConfig;
use crate::variation::Variation;

/// Одна партия: своя вариация со своими стопками, история и резолвер автоходов.
///
/// Основные операции:
///   - `start` / `start_with_deck`: выполнить раздачу (один раз);
///   - `handle`: обработать жест игрока, затем довести автоходы до неподвижной точки.
#[derive(Clone, Debug)]
pub struct GameSession {
    variation: Variation,
    resolver: AutoMoveResolver,
    history: GameHistory,
    dealt: bool,
}

impl GameSession {
    pub fn new(variation: Variation, config: &EngineConfig) -> Self {
        Self {
            variation,
            resolver: AutoMoveResolver::new(config.automove_limit),
            history: GameHistory::new(),
            dealt: false,
        }
    }

    pub fn variation(&self) -> &Variation {
        &self.variation
    }

    pub fn containers(&self) -> &Containers {
        &self.variation.containers
    }

    pub fn container(&self, kind: &ContainerType) -> Option<&Container> {
        self.variation.containers.get(kind)
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn is_dealt(&self) -> bool {
        self.dealt
    }

    /// Перемешать свежие колоды и раздать.
    pub fn start<R: RandomSource>(&mut self, rng: &mut R) -> Result<DealReport, EngineError> {
        let mut deck = Deck::multi(self.variation.decks);
        rng.shuffle(&mut deck.cards);
        self.start_with_deck(deck)
    }

    /// Раздать заданную колоду (для тестов и повторов).
    ///
    /// Раздача идёт на копии стопок и фиксируется только целиком.
    pub fn start_with_deck(&mut self, deck: Deck) -> Result<DealReport, EngineError> {
        if self.dealt {
            return Err(EngineError::Internal("deal already executed"));
        }
        let mut seen = HashSet::with_capacity(deck.len());
        if let Some(dup) = deck.cards.iter().find(|c| !seen.insert(c.id)) {
            return Err(EngineError::MalformedDeal(format!("card {dup} appears twice in the deck")));
        }

        let mut containers = self.variation.containers.clone();
        let report = self.variation.deal.execute(&mut containers, deck)?;
        self.variation.containers = containers;
        self.dealt = true;

        self.history.push(GameEventKind::Dealt {
            variation: self.variation.name.clone(),
            report,
        });
        Ok(report)
    }

    /// Обработать жест.
    ///
    /// Ходы списка `event.kind` перебираются в порядке регистрации; выполняется
    /// первый, у которого совпал источник (для drag ещё и цель) и выполнено ограничение.
    /// Если не подошёл ни один: `NoMoveApplied`, это не ошибка.
    pub fn handle(&mut self, event: &TriggerEvent) -> Result<TriggerOutcome, EngineError> {
        let containers = &self.variation.containers;
        containers.require(&event.source)?;

        let drop_target = match event.kind {
            TriggerKind::Drag => match &event.target {
                Some(t) => {
                    containers.require(t)?;
                    Some(t)
                }
                None => {
                    debug!("drag from {} without a drop target", event.source);
                    return Ok(self.no_move(event));
                }
            },
            TriggerKind::Press | TriggerKind::Click => None,
        };
        let dragged = match event.kind {
            TriggerKind::Drag => event.dragged.as_ref(),
            _ => None,
        };

        let mut chosen = None;
        for (idx, m) in self.variation.rules.moves(event.kind).iter().enumerate() {
            if m.source != event.source {
                continue;
            }
            match m.prepare(containers, drop_target, dragged) {
                Ok(Some(plan)) => {
                    chosen = Some((idx, plan));
                    break;
                }
                Ok(None) => debug!("move {} does not match", m.name),
                Err(e) if e.is_rejection() => warn!("move {} rejected: {}", m.name, e),
                Err(e) => return Err(e),
            }
        }

        let Some((idx, plan)) = chosen else {
            return Ok(self.no_move(event));
        };

        let m = &self.variation.rules.moves(event.kind)[idx];
        let applied = m.execute(&mut self.variation.containers, plan, Some(event.kind))?;
        info!("{:?} on {}: applied {}", event.kind, event.source, applied.name);
        self.history.push(GameEventKind::MoveApplied(applied.clone()));

        let automoves = if self.variation.automoves {
            self.run_automoves()?
        } else {
            AutoMoveReport::default()
        };

        Ok(TriggerOutcome::Applied { applied, automoves })
    }

    /// Довести автоходы до неподвижной точки (вызывается и после каждого хода).
    pub fn run_automoves(&mut self) -> Result<AutoMoveReport, EngineError> {
        let mut report = AutoMoveReport::default();
        let result = self
            .resolver
            .run_into(&self.variation.rules, &mut self.variation.containers, &mut report);
        // уже применённые автоходы попадают в историю и при ошибке
        for applied in &report.applied {
            self.history.push(GameEventKind::AutoMoveApplied(applied.clone()));
        }
        result.map(|()| report)
    }

    fn no_move(&mut self, event: &TriggerEvent) -> TriggerOutcome {
        self.history.push(GameEventKind::NoMoveApplied {
            trigger: event.kind,
            source: event.source.clone(),
        });
        TriggerOutcome::NoMoveApplied
    }
}
