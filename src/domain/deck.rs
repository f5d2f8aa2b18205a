use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене это просто упорядоченный список карт, верх колоды в конце.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs A..K, Diamonds A..K, Hearts A..K, Spades A..K. Все карты рубашкой вверх.
    pub fn standard_52() -> Self {
        Self::multi(1)
    }

    /// Несколько стандартных колод подряд; id карт не пересекаются.
    pub fn multi(decks: u16) -> Self {
        let mut cards = Vec::with_capacity(52 * decks as usize);
        for deck in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::with_deck(rank, suit, deck));
                }
            }
        }
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Забрать все карты (колода остаётся пустой).
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}
