use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardId, Dimension, Widget};

/// DTO карты. Код закрытой карты не отдаётся.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub id: CardId,
    pub face_up: bool,
    /// `Ah`, `Td`, … – только для открытых карт.
    pub code: Option<String>,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            face_up: card.face_up,
            code: card.face_up.then(|| card.to_string()),
        }
    }
}

/// DTO одной стопки: содержимое снизу вверх и её виджеты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContainerViewDto {
    pub name: String,
    pub cards: Vec<CardDto>,
    pub widgets: Vec<Widget>,
}

/// DTO всей партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariationViewDto {
    pub name: String,
    pub containers: Vec<ContainerViewDto>,
    /// Минимальный размер поля (считает слой раскладки по виджетам).
    pub minimum_size: Dimension,
    pub automoves: bool,
    pub dealt: bool,
    /// Сколько ходов применено с начала партии.
    pub applied_moves: usize,
}

/// Итог обработки жеста для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriggerResultDto {
    /// Имя применённого хода; `None`: ни один ход не подошёл.
    pub applied: Option<String>,
    /// Имена автоходов в порядке применения.
    pub automoves: Vec<String>,
}
