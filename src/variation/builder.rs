use log::info;

use crate::domain::{Container, ContainerType, Containers, ElementKind, Placement};
use crate::engine::deal::{Deal, DealStep};
use crate::engine::errors::EngineError;
use crate::engine::moves::Move;
use crate::engine::rules::Rules;
use crate::engine::trigger::TriggerKind;
use crate::variation::Variation;

/// Сценарий сборки вариации. Операции применяются в порядке вызова;
/// дубликаты и несуществующие имена сразу становятся ошибками конфигурации.
#[derive(Debug)]
pub struct VariationBuilder {
    name: String,
    containers: Containers,
    rules: Rules,
    deal: Deal,
    automoves: bool,
    elements: Vec<ElementKind>,
    decks: u16,
}

impl VariationBuilder {
    /// Одиночная карта зарегистрирована всегда.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            containers: Containers::new(),
            rules: Rules::new(),
            deal: Deal::new(),
            automoves: false,
            elements: vec![ElementKind::Card],
            decks: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn container(
        mut self,
        kind: impl Into<ContainerType>,
        container: Container,
    ) -> Result<Self, EngineError> {
        self.containers.insert(kind.into(), container)?;
        Ok(self)
    }

    /// Поменять геометрию уже зарегистрированного контейнера.
    pub fn placement(mut self, kind: impl Into<ContainerType>, placement: Placement) -> Result<Self, EngineError> {
        self.containers.require_mut(&kind.into())?.placement = placement;
        Ok(self)
    }

    pub fn register_element(mut self, kind: ElementKind) -> Self {
        if !self.elements.contains(&kind) {
            self.elements.push(kind);
        }
        self
    }

    pub fn deal_step(mut self, step: DealStep) -> Self {
        self.deal.add(step);
        self
    }

    pub fn decks(mut self, decks: u16) -> Self {
        self.decks = decks;
        self
    }

    pub fn automoves(mut self, enabled: bool) -> Self {
        self.automoves = enabled;
        self
    }

    pub fn add_move(mut self, trigger: TriggerKind, m: Move) -> Result<Self, EngineError> {
        self.rules.add_move(trigger, m)?;
        Ok(self)
    }

    pub fn press_move(self, m: Move) -> Result<Self, EngineError> {
        self.add_move(TriggerKind::Press, m)
    }

    pub fn click_move(self, m: Move) -> Result<Self, EngineError> {
        self.add_move(TriggerKind::Click, m)
    }

    pub fn drag_move(self, m: Move) -> Result<Self, EngineError> {
        self.add_move(TriggerKind::Drag, m)
    }

    pub fn remove_move(mut self, trigger: TriggerKind, name: &str) -> Result<Self, EngineError> {
        self.rules.remove_move(trigger, name)?;
        Ok(self)
    }

    /// Переопределить ход базовой вариации: удалить по имени и добавить замену.
    pub fn override_move(mut self, trigger: TriggerKind, name: &str, replacement: Move) -> Result<Self, EngineError> {
        self.rules.replace_move(trigger, name, replacement)?;
        Ok(self)
    }

    /// Финальная проверка ссылок и сборка.
    pub fn build(self) -> Result<Variation, EngineError> {
        if self.decks == 0 {
            return Err(EngineError::InvalidConfig("variation needs at least one deck".into()));
        }
        for (_, m) in self.rules.all() {
            self.containers.require(&m.source)?;
            for target in m.targets() {
                self.containers.require(target)?;
            }
            if !self.elements.contains(&m.element) {
                return Err(EngineError::MalformedMove {
                    name: m.name.clone(),
                    reason: format!("element {:?} is not registered", m.element),
                });
            }
        }
        if !self.deal.is_empty() {
            self.deal.validate(&self.containers)?;
        }

        info!(
            "variation {} built: {} containers, {} moves, automoves {}",
            self.name,
            self.containers.len(),
            self.rules.len(),
            self.automoves
        );

        Ok(Variation {
            name: self.name,
            containers: self.containers,
            rules: self.rules,
            deal: self.deal,
            automoves: self.automoves,
            elements: self.elements,
            decks: self.decks,
        })
    }
}
