use serde::{Deserialize, Serialize};

use log::{debug, info};

use crate::domain::{ContainerType, Containers, Deck, Element, Reveal};
use crate::engine::constraint::Constraint;
use crate::engine::errors::EngineError;
use crate::engine::moves::Move;

/// Один шаг начальной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DealStep {
    /// Положить всю (уже перемешанную) колоду в контейнер.
    Fill { target: ContainerType, face_up: bool },
    /// `times` раз перенести `count` верхних карт из `from` в `to`.
    Transfer {
        from: ContainerType,
        to: ContainerType,
        count: usize,
        times: usize,
        face_up: bool,
    },
    /// Перевернуть верхнюю карту лицом вверх.
    FlipTop { container: ContainerType },
}

/// Упорядоченный сценарий раздачи. Выполняется один раз при старте игры.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deal {
    steps: Vec<DealStep>,
}

/// Сводка выполненной раздачи.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealReport {
    pub steps: usize,
    pub cards_moved: usize,
}

impl Deal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, step: DealStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[DealStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Статическая проверка: контейнеры существуют, размеры ненулевые,
    /// колода кладётся ровно один раз и раньше любых переносов.
    pub fn validate(&self, containers: &Containers) -> Result<(), EngineError> {
        let mut filled = false;
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                DealStep::Fill { target, .. } => {
                    containers.require(target)?;
                    if filled {
                        return Err(EngineError::MalformedDeal(format!("step {i}: deck placed twice")));
                    }
                    filled = true;
                }
                DealStep::Transfer {
                    from, to, count, ..
                } => {
                    containers.require(from)?;
                    containers.require(to)?;
                    if *count == 0 {
                        return Err(EngineError::MalformedDeal(format!("step {i}: zero cards")));
                    }
                    if !filled {
                        return Err(EngineError::MalformedDeal(format!(
                            "step {i}: transfer before the deck is placed"
                        )));
                    }
                }
                DealStep::FlipTop { container } => {
                    containers.require(container)?;
                }
            }
        }
        if !filled {
            return Err(EngineError::MalformedDeal("deck is never placed".into()));
        }
        Ok(())
    }

    /// Проиграть раздачу на контейнерах. Любой невыполнимый шаг: фатальная ошибка.
    pub fn execute(&self, containers: &mut Containers, mut deck: Deck) -> Result<DealReport, EngineError> {
        self.validate(containers)?;
        let mut report = DealReport::default();

        for (i, step) in self.steps.iter().enumerate() {
            match step {
                DealStep::Fill { target, face_up } => {
                    let mut cards = deck.take_all();
                    for card in cards.iter_mut() {
                        card.face_up = *face_up;
                    }
                    report.cards_moved += cards.len();
                    containers.require_mut(target)?.accept(Element::Run(cards))?;
                }
                DealStep::Transfer {
                    from,
                    to,
                    count,
                    times,
                    face_up,
                } => {
                    let reveal = if *face_up { Reveal::FaceUp } else { Reveal::FaceDown };
                    let transfer = Move::deal(format!("deal-step-{i}"), from.clone(), vec![to.clone()], *count, Constraint::Always)
                        .with_reveal(reveal);
                    for _ in 0..*times {
                        let plan = match transfer.prepare(containers, None, None) {
                            Ok(Some(plan)) => plan,
                            Ok(None) => {
                                return Err(EngineError::MalformedDeal(format!("step {i}: transfer rejected")))
                            }
                            Err(EngineError::InsufficientCards { needed, available }) => {
                                return Err(EngineError::MalformedDeal(format!(
                                    "step {i}: {from} exhausted (needed {needed}, available {available})"
                                )))
                            }
                            Err(e) => return Err(e),
                        };
                        let applied = transfer.execute(containers, plan, None)?;
                        report.cards_moved += applied.cards.len();
                    }
                }
                DealStep::FlipTop { container } => {
                    if !containers.require_mut(container)?.flip_top(true) {
                        debug!("deal step {i}: {container} is empty, nothing to flip");
                    }
                }
            }
            report.steps += 1;
        }

        info!("deal finished: {} steps, {} cards moved", report.steps, report.cards_moved);
        Ok(report)
    }
}
