use serde::{Deserialize, Serialize};

use log::debug;

use crate::domain::{Card, Container, ContainerType, Containers, Element, ElementKind, Reveal};
use crate::engine::constraint::{Constraint, MoveContext};
use crate::engine::errors::EngineError;
use crate::engine::trigger::TriggerKind;

/// Вид хода и его цели.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Нажатие на источник; цель задана при объявлении.
    Press { target: ContainerType },
    /// Клик по источнику; побеждает первая по порядку цель, где выполнено ограничение.
    Click { targets: Vec<ContainerType> },
    /// Перетаскивание; цель: то, куда бросили (из списка допустимых).
    Drag { targets: Vec<ContainerType> },
    /// Сдача: элемент фиксированного размера в КАЖДУЮ цель, всё или ничего.
    Deal { targets: Vec<ContainerType> },
}

/// Именованный ход: откуда, куда, что и при каком условии.
#[derive(Clone, Debug)]
pub struct Move {
    pub name: String,
    pub source: ContainerType,
    pub kind: MoveKind,
    pub element: ElementKind,
    pub constraint: Constraint,
    pub reveal: Reveal,
    /// Может ли резолвер автоходов применять этот ход сам.
    pub automove: bool,
}

/// План переноса: какой элемент в какую цель. Первым идёт самый верхний.
pub(crate) type MovePlan = Vec<(ContainerType, Element)>;

impl Move {
    fn with_kind(
        name: impl Into<String>,
        source: impl Into<ContainerType>,
        kind: MoveKind,
        element: ElementKind,
        constraint: Constraint,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            kind,
            element,
            constraint,
            reveal: Reveal::Keep,
            automove: false,
        }
    }

    pub fn press(
        name: impl Into<String>,
        source: impl Into<ContainerType>,
        target: impl Into<ContainerType>,
        element: ElementKind,
        constraint: Constraint,
    ) -> Self {
        let kind = MoveKind::Press {
            target: target.into(),
        };
        Self::with_kind(name, source, kind, element, constraint)
    }

    pub fn click(
        name: impl Into<String>,
        source: impl Into<ContainerType>,
        targets: Vec<ContainerType>,
        element: ElementKind,
        constraint: Constraint,
    ) -> Self {
        Self::with_kind(name, source, MoveKind::Click { targets }, element, constraint)
    }

    pub fn drag(
        name: impl Into<String>,
        source: impl Into<ContainerType>,
        targets: Vec<ContainerType>,
        element: ElementKind,
        constraint: Constraint,
    ) -> Self {
        Self::with_kind(name, source, MoveKind::Drag { targets }, element, constraint)
    }

    /// Сдача по `per_target` карт в каждую цель.
    pub fn deal(
        name: impl Into<String>,
        source: impl Into<ContainerType>,
        targets: Vec<ContainerType>,
        per_target: usize,
        constraint: Constraint,
    ) -> Self {
        let element = if per_target == 1 {
            ElementKind::Card
        } else {
            ElementKind::FanPile(per_target)
        };
        Self::with_kind(name, source, MoveKind::Deal { targets }, element, constraint)
    }

    pub fn with_reveal(mut self, reveal: Reveal) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn as_automove(mut self) -> Self {
        self.automove = true;
        self
    }

    /// Сдача всегда многокарточная; у остальных размер задаёт форма элемента.
    pub fn is_single_card(&self) -> bool {
        match self.kind {
            MoveKind::Deal { .. } => false,
            _ => self.element.is_single_card(),
        }
    }

    pub fn is_single_destination(&self) -> bool {
        !matches!(self.kind, MoveKind::Deal { .. })
    }

    pub fn targets(&self) -> &[ContainerType] {
        match &self.kind {
            MoveKind::Press { target } => std::slice::from_ref(target),
            MoveKind::Click { targets } | MoveKind::Drag { targets } | MoveKind::Deal { targets } => {
                targets
            }
        }
    }

    /// Проверка формы хода при регистрации.
    pub fn validate(&self) -> Result<(), EngineError> {
        let malformed = |reason: &str| EngineError::MalformedMove {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.name.is_empty() {
            return Err(malformed("empty name"));
        }
        if self.targets().is_empty() {
            return Err(malformed("no targets"));
        }
        if self.element.fixed_size() == Some(0) {
            return Err(malformed("zero-sized element"));
        }
        if matches!(self.kind, MoveKind::Deal { .. }) && self.element.fixed_size().is_none() {
            return Err(malformed("deal needs a fixed element size"));
        }
        Ok(())
    }

    /// Элемент, который этот ход снял бы с источника.
    ///
    /// `Ok(None)`: перетащенный элемент не подходит по форме.
    fn extract(&self, source: &Container, dragged: Option<&Element>) -> Result<Option<Element>, EngineError> {
        if let Some(dragged) = dragged {
            if !source.ends_with(dragged) {
                return Err(EngineError::InvariantViolation(format!(
                    "dragged element is not at the top of {}",
                    self.source
                )));
            }
            // Дальше работаем с настоящими картами источника, не с копией из жеста.
            let element = source.top_element(dragged.len())?;
            return Ok(self.element.admits(&element).then_some(element));
        }
        let n = match self.element.fixed_size() {
            Some(n) => n,
            None => source.face_up_run_len(),
        };
        source.top_element(n).map(Some)
    }

    fn passes(
        &self,
        containers: &Containers,
        source: &Container,
        target: &ContainerType,
        element: &Element,
    ) -> Result<bool, EngineError> {
        let ctx = MoveContext {
            containers,
            source_type: &self.source,
            source,
            target_type: Some(target),
            target: Some(containers.require(target)?),
            element,
        };
        Ok(self.constraint.evaluate(&ctx))
    }

    /// Подобрать план для текущего состояния, ничего не меняя.
    ///
    /// - `Ok(None)`: ход не подходит (ограничение ложно, не та цель, не та форма);
    /// - `Err(InsufficientCards | NoLegalTarget)`: отказ, на жесте игрока это no-op;
    /// - прочие ошибки: ошибки конфигурации или инварианта.
    pub(crate) fn prepare(
        &self,
        containers: &Containers,
        drop_target: Option<&ContainerType>,
        dragged: Option<&Element>,
    ) -> Result<Option<MovePlan>, EngineError> {
        let source = containers.require(&self.source)?;

        if let Some(t) = drop_target {
            if !self.targets().contains(t) {
                return Ok(None);
            }
        }

        if let MoveKind::Deal { targets } = &self.kind {
            return self.prepare_deal(containers, source, targets);
        }

        let Some(element) = self.extract(source, dragged)? else {
            return Ok(None);
        };

        let candidates: &[ContainerType] = match (&self.kind, drop_target) {
            (_, Some(t)) => std::slice::from_ref(t),
            (kind, None) => match kind {
                MoveKind::Press { target } => std::slice::from_ref(target),
                _ => self.targets(),
            },
        };

        for target in candidates {
            if self.passes(containers, source, target, &element)? {
                debug!("move {}: target {} accepts {} card(s)", self.name, target, element.len());
                return Ok(Some(vec![(target.clone(), element)]));
            }
        }

        match self.kind {
            MoveKind::Click { .. } if drop_target.is_none() => Err(EngineError::NoLegalTarget),
            _ => Ok(None),
        }
    }

    fn prepare_deal(
        &self,
        containers: &Containers,
        source: &Container,
        targets: &[ContainerType],
    ) -> Result<Option<MovePlan>, EngineError> {
        let per_target = self.element.fixed_size().unwrap_or(1);
        let needed = per_target * targets.len();
        let cards = source.contents();
        if cards.len() < needed {
            return Err(EngineError::InsufficientCards {
                needed,
                available: cards.len(),
            });
        }

        // Верхняя пачка уходит в первую цель, следующая во вторую, и т.д.
        let mut plan = Vec::with_capacity(targets.len());
        for (i, target) in targets.iter().enumerate() {
            let end = cards.len() - i * per_target;
            let chunk = Element::from_cards(cards[end - per_target..end].to_vec());
            if !self.passes(containers, source, target, &chunk)? {
                return Ok(None);
            }
            plan.push((target.clone(), chunk));
        }
        Ok(Some(plan))
    }

    /// Применить подготовленный план. Перенос атомарен.
    pub(crate) fn execute(
        &self,
        containers: &mut Containers,
        plan: MovePlan,
        trigger: Option<TriggerKind>,
    ) -> Result<AppliedMove, EngineError> {
        containers.transfer(&self.source, &plan, self.reveal)?;
        let mut targets = Vec::with_capacity(plan.len());
        let mut cards = Vec::new();
        for (target, element) in plan {
            targets.push(target);
            cards.extend(element.into_cards());
        }
        Ok(AppliedMove {
            name: self.name.clone(),
            trigger,
            source: self.source.clone(),
            targets,
            cards,
        })
    }
}

/// Применённый ход: для истории, UI и отчёта автоходов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppliedMove {
    pub name: String,
    /// `None`: ход применён резолвером автоходов.
    pub trigger: Option<TriggerKind>,
    pub source: ContainerType,
    pub targets: Vec<ContainerType>,
    /// Перенесённые карты в порядке плана (как лежали до переноса).
    pub cards: Vec<Card>,
}

impl AppliedMove {
    pub fn is_automatic(&self) -> bool {
        self.trigger.is_none()
    }
}
