//! Вариация пасьянса: контейнеры, правила, раздача, флаг автоходов.
//!
//! Вариация собирается один раз через `VariationBuilder` и дальше как
//! конфигурация правил не меняется; меняется только содержимое стопок.

pub mod builder;
pub mod klondike;

pub use builder::VariationBuilder;
pub use klondike::{DealByThree, Klondike};

use crate::domain::{minimum_size, CardId, Container, ContainerType, Containers, Dimension, ElementKind};
use crate::engine::deal::Deal;
use crate::engine::errors::EngineError;
use crate::engine::rules::Rules;

#[derive(Clone, Debug)]
pub struct Variation {
    pub(crate) name: String,
    pub(crate) containers: Containers,
    pub(crate) rules: Rules,
    pub(crate) deal: Deal,
    pub(crate) automoves: bool,
    pub(crate) elements: Vec<ElementKind>,
    pub(crate) decks: u16,
}

impl Variation {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn containers(&self) -> &Containers {
        &self.containers
    }

    pub fn container(&self, kind: &ContainerType) -> Option<&Container> {
        self.containers.get(kind)
    }

    pub fn container_by_name(&self, name: &str) -> Option<&Container> {
        self.containers.by_name(name)
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn deal(&self) -> &Deal {
        &self.deal
    }

    pub fn has_automoves(&self) -> bool {
        self.automoves
    }

    pub fn elements(&self) -> &[ElementKind] {
        &self.elements
    }

    /// Сколько стандартных колод нужно для раздачи.
    pub fn decks(&self) -> u16 {
        self.decks
    }

    /// Где сейчас лежит карта.
    pub fn locate(&self, id: CardId) -> Option<&ContainerType> {
        self.containers.locate(id)
    }

    /// Минимальный размер поля по геометрии всех контейнеров.
    pub fn minimum_size(&self) -> Dimension {
        minimum_size(self.containers.iter().map(|(_, c)| &c.placement))
    }
}

/// Определение вариации. Производная вариация вызывает `configure` базовой
/// и затем переопределяет ходы по имени.
pub trait VariationDef {
    fn name(&self) -> String;

    fn configure(&self, builder: VariationBuilder) -> Result<VariationBuilder, EngineError>;

    fn build(&self) -> Result<Variation, EngineError> {
        self.configure(VariationBuilder::new(self.name()))?.build()
    }
}
