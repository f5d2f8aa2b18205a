use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardId};
use crate::domain::element::Element;
use crate::domain::layout::Placement;
use crate::engine::errors::EngineError;

/// Имя контейнера внутри вариации ("Stock", "Waste", "Foundation-1", …).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ContainerType(pub String);

impl ContainerType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Что сделать с лицом карт при переносе.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Keep,
    FaceUp,
    FaceDown,
}

impl Reveal {
    fn apply(self, card: &mut Card) {
        match self {
            Reveal::Keep => {}
            Reveal::FaceUp => card.face_up = true,
            Reveal::FaceDown => card.face_up = false,
        }
    }
}

/// Стопка карт. Низ стопки в начале вектора, верх в конце.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Container {
    cards: Vec<Card>,
    pub placement: Placement,
}

impl Container {
    pub fn new(placement: Placement) -> Self {
        Self {
            cards: Vec::new(),
            placement,
        }
    }

    /// Контейнер с уже лежащими картами (для тестов и восстановления).
    pub fn with_cards(placement: Placement, cards: Vec<Card>) -> Self {
        Self { cards, placement }
    }

    pub fn contents(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Верхние n карт как кандидат на перемещение (контейнер не меняется).
    pub fn top_element(&self, n: usize) -> Result<Element, EngineError> {
        if n == 0 || self.cards.len() < n {
            return Err(EngineError::InsufficientCards {
                needed: n,
                available: self.cards.len(),
            });
        }
        Ok(Element::from_cards(self.cards[self.cards.len() - n..].to_vec()))
    }

    /// Сколько открытых карт лежит подряд сверху.
    pub fn face_up_run_len(&self) -> usize {
        self.cards.iter().rev().take_while(|c| c.face_up).count()
    }

    /// Лежит ли элемент ровно на верху стопки.
    pub fn ends_with(&self, element: &Element) -> bool {
        ends_with(&self.cards, element.cards())
    }

    /// Положить элемент наверх. Карта не может лежать в стопке дважды.
    pub fn accept(&mut self, element: Element) -> Result<(), EngineError> {
        if element
            .cards()
            .iter()
            .any(|card| self.cards.iter().any(|c| c.same_card(card)))
        {
            return Err(EngineError::InvariantViolation(
                "element is already in the container".into(),
            ));
        }
        self.cards.extend(element.into_cards());
        Ok(())
    }

    /// Снять элемент с верха. Элемент обязан лежать сверху именно этой стопки.
    pub fn remove(&mut self, element: &Element) -> Result<Element, EngineError> {
        if element.is_empty() || !self.ends_with(element) {
            return Err(EngineError::InvariantViolation(format!(
                "element of {} cards is not at the top of the container",
                element.len()
            )));
        }
        let at = self.cards.len() - element.len();
        Ok(Element::from_cards(self.cards.split_off(at)))
    }

    /// Перевернуть верхнюю карту. false, если стопка пуста.
    pub fn flip_top(&mut self, face_up: bool) -> bool {
        match self.cards.last_mut() {
            Some(card) => {
                card.face_up = face_up;
                true
            }
            None => false,
        }
    }
}

fn ends_with(cards: &[Card], tail: &[Card]) -> bool {
    tail.len() <= cards.len()
        && cards[cards.len() - tail.len()..]
            .iter()
            .zip(tail)
            .all(|(a, b)| a.same_card(b))
}

/// Все контейнеры вариации в порядке регистрации.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Containers {
    entries: Vec<(ContainerType, Container)>,
}

impl Containers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Зарегистрировать контейнер; имя должно быть уникальным.
    pub fn insert(&mut self, kind: ContainerType, container: Container) -> Result<(), EngineError> {
        if self.contains(&kind) {
            return Err(EngineError::DuplicateContainer(kind));
        }
        self.entries.push((kind, container));
        Ok(())
    }

    pub fn contains(&self, kind: &ContainerType) -> bool {
        self.entries.iter().any(|(k, _)| k == kind)
    }

    pub fn get(&self, kind: &ContainerType) -> Option<&Container> {
        self.entries.iter().find(|(k, _)| k == kind).map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, kind: &ContainerType) -> Option<&mut Container> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == kind)
            .map(|(_, c)| c)
    }

    pub fn require(&self, kind: &ContainerType) -> Result<&Container, EngineError> {
        self.get(kind)
            .ok_or_else(|| EngineError::UnknownContainer(kind.clone()))
    }

    pub fn require_mut(&mut self, kind: &ContainerType) -> Result<&mut Container, EngineError> {
        self.get_mut(kind)
            .ok_or_else(|| EngineError::UnknownContainer(kind.clone()))
    }

    pub fn by_name(&self, name: &str) -> Option<&Container> {
        self.entries
            .iter()
            .find(|(k, _)| k.name() == name)
            .map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContainerType, &Container)> {
        self.entries.iter().map(|(k, c)| (k, c))
    }

    pub fn names(&self) -> impl Iterator<Item = &ContainerType> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_cards(&self) -> usize {
        self.entries.iter().map(|(_, c)| c.len()).sum()
    }

    /// В каком контейнере сейчас лежит карта.
    pub fn locate(&self, id: CardId) -> Option<&ContainerType> {
        self.entries
            .iter()
            .find(|(_, c)| c.contents().iter().any(|card| card.id == id))
            .map(|(k, _)| k)
    }

    /// Атомарный перенос: элементы снимаются с верха `source` по порядку
    /// (первый: самый верхний) и кладутся в свои цели.
    ///
    /// Сначала проверяется весь план, потом применяется целиком:
    /// при ошибке ни одна стопка не меняется.
    pub fn transfer(
        &mut self,
        source: &ContainerType,
        plan: &[(ContainerType, Element)],
        reveal: Reveal,
    ) -> Result<(), EngineError> {
        let src = self.require(source)?;
        let mut remaining = src.contents();
        for (target, element) in plan {
            self.require(target)?;
            if element.is_empty() || !ends_with(remaining, element.cards()) {
                return Err(EngineError::InvariantViolation(format!(
                    "element for {target} is not at the top of {source}"
                )));
            }
            remaining = &remaining[..remaining.len() - element.len()];
        }
        let keep = remaining.len();

        // Дальше ошибок быть не может: всё проверено выше.
        // В цели кладутся снятые с источника карты, а не копии из плана.
        let mut taken = self.require_mut(source)?.cards.split_off(keep);
        for (target, element) in plan {
            let mut chunk = taken.split_off(taken.len() - element.len());
            for card in chunk.iter_mut() {
                reveal.apply(card);
            }
            self.require_mut(target)?.cards.append(&mut chunk);
        }
        Ok(())
    }
}
