//! Klondike и его производная «сдача по три».
//!
//! Обе вариации собраны только из словаря движка: контейнеры, шаги раздачи,
//! ходы с ограничениями. DealByThree переопределяет ход `DealDeck` базовой.

use crate::domain::{Container, ContainerType, ElementKind, Geometry, Placement, Rank, Reveal, Widget};
use crate::engine::constraint::{Constraint, MoveComponent, Predicate};
use crate::engine::deal::DealStep;
use crate::engine::errors::EngineError;
use crate::engine::moves::Move;
use crate::engine::trigger::TriggerKind;
use crate::variation::{VariationBuilder, VariationDef};

pub const STOCK: &str = "Stock";
pub const WASTE: &str = "Waste";
pub const FOUNDATIONS: usize = 4;
pub const TABLEAU_COLUMNS: usize = 7;

pub fn foundation(i: usize) -> ContainerType {
    ContainerType::new(format!("Foundation-{i}"))
}

pub fn tableau(i: usize) -> ContainerType {
    ContainerType::new(format!("Tableau-{i}"))
}

fn foundations() -> Vec<ContainerType> {
    (1..=FOUNDATIONS).map(foundation).collect()
}

fn tableaus() -> Vec<ContainerType> {
    (1..=TABLEAU_COLUMNS).map(tableau).collect()
}

/// На пустой дом: туз, иначе следующая карта той же масти.
pub fn foundation_accepts() -> Constraint {
    Constraint::or([
        Constraint::and([
            Constraint::is_empty(MoveComponent::Target),
            Predicate::BottomRank(Rank::Ace).into(),
        ]),
        Constraint::and([
            Constraint::from(Predicate::SameSuitAsTarget),
            Predicate::RankAboveTarget.into(),
        ]),
    ])
}

/// На пустую колонку: король, иначе на ранг ниже и другого цвета.
pub fn tableau_accepts() -> Constraint {
    Constraint::or([
        Constraint::and([
            Constraint::is_empty(MoveComponent::Target),
            Predicate::BottomRank(Rank::King).into(),
        ]),
        Constraint::and([
            Constraint::from(Predicate::OppositeColorToTarget),
            Predicate::RankBelowTarget.into(),
        ]),
    ])
}

fn stock_not_empty() -> Constraint {
    Constraint::not(Constraint::is_empty(MoveComponent::Source))
}

/// Классический Klondike со сдачей по одной карте.
#[derive(Clone, Debug, Default)]
pub struct Klondike {
    pub geometry: Geometry,
}

impl Klondike {
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    fn widget(&self, x: u32, y: u32) -> Placement {
        Placement::Single(Widget::new(x, y, self.geometry.card_width, self.geometry.card_height))
    }
}

impl VariationDef for Klondike {
    fn name(&self) -> String {
        "Klondike".into()
    }

    fn configure(&self, builder: VariationBuilder) -> Result<VariationBuilder, EngineError> {
        let g = self.geometry;
        let step = g.card_width + g.card_gap;
        let row_y = g.card_gap + 5;
        let tableau_y = row_y + g.card_height + g.card_gap;

        let mut b = builder
            .register_element(ElementKind::Column)
            .container(STOCK, Container::new(self.widget(g.card_gap, row_y)))?
            .container(WASTE, Container::new(self.widget(g.card_gap + step, row_y)))?;

        for i in 1..=FOUNDATIONS {
            let x = g.card_gap + (i as u32 + 2) * step;
            b = b.container(foundation(i), Container::new(self.widget(x, row_y)))?;
        }
        for i in 1..=TABLEAU_COLUMNS {
            let x = g.card_gap + (i as u32 - 1) * step;
            let column = Widget::new(x, tableau_y, g.card_width, g.card_height + 12 * g.card_overlap);
            b = b.container(tableau(i), Container::new(Placement::Single(column)))?;
        }

        // Раздача: колода в Stock, в колонку i по i карт, верхняя открыта.
        b = b.deal_step(DealStep::Fill {
            target: STOCK.into(),
            face_up: false,
        });
        for i in 1..=TABLEAU_COLUMNS {
            b = b
                .deal_step(DealStep::Transfer {
                    from: STOCK.into(),
                    to: tableau(i),
                    count: 1,
                    times: i,
                    face_up: false,
                })
                .deal_step(DealStep::FlipTop { container: tableau(i) });
        }

        b = b.press_move(
            Move::deal("DealDeck", STOCK, vec![WASTE.into()], 1, stock_not_empty()).with_reveal(Reveal::FaceUp),
        )?;

        for i in 1..=TABLEAU_COLUMNS {
            b = b.press_move(
                Move::press(
                    format!("FlipCard-{i}"),
                    tableau(i),
                    tableau(i),
                    ElementKind::Card,
                    Predicate::TopFaceDown(MoveComponent::Source).into(),
                )
                .with_reveal(Reveal::FaceUp)
                .as_automove(),
            )?;
        }

        b = b.click_move(
            Move::click("WasteToFoundation", WASTE, foundations(), ElementKind::Card, foundation_accepts())
                .as_automove(),
        )?;
        for i in 1..=TABLEAU_COLUMNS {
            let constraint = Constraint::and([Predicate::ElementFaceUp.into(), foundation_accepts()]);
            b = b.click_move(
                Move::click(format!("TableauToFoundation-{i}"), tableau(i), foundations(), ElementKind::Card, constraint)
                    .as_automove(),
            )?;
        }

        b = b
            .drag_move(Move::drag("WasteToTableau", WASTE, tableaus(), ElementKind::Card, tableau_accepts()))?
            .drag_move(Move::drag("WasteToFoundation", WASTE, foundations(), ElementKind::Card, foundation_accepts()))?;
        for i in 1..=TABLEAU_COLUMNS {
            let others: Vec<ContainerType> = (1..=TABLEAU_COLUMNS).filter(|&j| j != i).map(tableau).collect();
            let constraint = Constraint::and([
                Constraint::from(Predicate::ElementFaceUp),
                Predicate::ElementDescendingAlternating.into(),
                tableau_accepts(),
            ]);
            b = b.drag_move(Move::drag(format!("TableauToTableau-{i}"), tableau(i), others, ElementKind::Column, constraint))?;
        }

        Ok(b.automoves(true))
    }
}

/// Klondike со сдачей по `num_to_deal` карт; отбой раскладывается веером.
#[derive(Clone, Debug)]
pub struct DealByThree {
    pub base: Klondike,
    pub num_to_deal: usize,
}

impl Default for DealByThree {
    fn default() -> Self {
        Self {
            base: Klondike::default(),
            num_to_deal: 3,
        }
    }
}

impl DealByThree {
    pub fn new(geometry: Geometry, num_to_deal: usize) -> Self {
        Self {
            base: Klondike::new(geometry),
            num_to_deal,
        }
    }
}

impl VariationDef for DealByThree {
    fn name(&self) -> String {
        "DealByThree".into()
    }

    fn configure(&self, builder: VariationBuilder) -> Result<VariationBuilder, EngineError> {
        let g = self.base.geometry;
        let fan = Widget::new(
            g.card_gap + g.card_width + g.card_gap,
            g.card_gap + 5,
            g.card_width + 2 * g.card_overlap,
            g.card_height,
        );
        let replacement = Move::deal("DealDeck", STOCK, vec![WASTE.into()], self.num_to_deal, stock_not_empty())
            .with_reveal(Reveal::FaceUp);

        self.base
            .configure(builder)?
            .register_element(ElementKind::FanPile(self.num_to_deal))
            .placement(WASTE, Placement::Single(fan))?
            .override_move(TriggerKind::Press, "DealDeck", replacement)
    }
}
