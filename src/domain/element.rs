use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Форма перемещаемого элемента, которую объявляет ход.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Одна верхняя карта.
    Card,
    /// Столбец: открытые карты сверху стопки (или то, что перетащили).
    Column,
    /// Группа ровно из n карт (например, сдача по три).
    FanPile(usize),
}

impl ElementKind {
    pub fn is_single_card(self) -> bool {
        matches!(self, ElementKind::Card | ElementKind::FanPile(1))
    }

    /// Фиксированный размер элемента, если он есть.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            ElementKind::Card => Some(1),
            ElementKind::FanPile(n) => Some(n),
            ElementKind::Column => None,
        }
    }

    /// Подходит ли уже собранный элемент под эту форму.
    pub fn admits(self, element: &Element) -> bool {
        match self.fixed_size() {
            Some(n) => element.len() == n,
            None => !element.is_empty(),
        }
    }
}

/// Перемещаемая единица: одна карта или упорядоченная серия карт.
///
/// Порядок карт как в контейнере: первая нижняя, последняя верхняя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Element {
    Card(Card),
    Run(Vec<Card>),
}

impl Element {
    /// Собрать элемент из карт; одна карта становится `Element::Card`.
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        if cards.len() == 1 {
            if let Some(card) = cards.pop() {
                return Element::Card(card);
            }
        }
        Element::Run(cards)
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Element::Card(card) => std::slice::from_ref(card),
            Element::Run(cards) => cards,
        }
    }

    pub fn into_cards(self) -> Vec<Card> {
        match self {
            Element::Card(card) => vec![card],
            Element::Run(cards) => cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// Нижняя карта элемента: именно она ложится на верх целевой стопки.
    pub fn bottom(&self) -> Option<&Card> {
        self.cards().first()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards().last()
    }
}
