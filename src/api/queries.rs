use serde::{Deserialize, Serialize};

use crate::domain::{Container, ContainerType, Dimension};
use crate::engine::{GameHistory, GameSession};

use super::dto::{CardDto, ContainerViewDto, VariationViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Получить всю партию.
    GetVariation,

    /// Получить одну стопку по имени.
    GetContainer { name: String },

    /// Минимальный размер поля.
    MinimumSize,

    /// История партии.
    History,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Variation(VariationViewDto),
    Container(ContainerViewDto),
    MinimumSize(Dimension),
    History(GameHistory),
}

pub fn handle_query(session: &GameSession, query: &Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetVariation => Ok(QueryResponse::Variation(build_variation_view(session))),
        Query::GetContainer { name } => {
            let container = session
                .variation()
                .container_by_name(name)
                .ok_or_else(|| ApiError::UnknownContainer(name.clone()))?;
            Ok(QueryResponse::Container(build_container_view(
                &ContainerType::new(name.as_str()),
                container,
            )))
        }
        Query::MinimumSize => Ok(QueryResponse::MinimumSize(session.variation().minimum_size())),
        Query::History => Ok(QueryResponse::History(session.history().clone())),
    }
}

/// Сформировать DTO стопки.
pub fn build_container_view(kind: &ContainerType, container: &Container) -> ContainerViewDto {
    ContainerViewDto {
        name: kind.name().to_string(),
        cards: container.contents().iter().map(CardDto::from).collect(),
        widgets: container.placement.widgets(),
    }
}

/// Сформировать DTO всей партии.
pub fn build_variation_view(session: &GameSession) -> VariationViewDto {
    let variation = session.variation();
    VariationViewDto {
        name: variation.name().to_string(),
        containers: variation
            .containers()
            .iter()
            .map(|(kind, c)| build_container_view(kind, c))
            .collect(),
        minimum_size: variation.minimum_size(),
        automoves: variation.has_automoves(),
        dealt: session.is_dealt(),
        applied_moves: session.history().applied_moves(),
    }
}
