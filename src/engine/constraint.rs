//! Ограничения ходов: чистые предикаты над контекстом хода.
//!
//! Ограничение: дерево из листьев-предикатов и комбинаторов
//! `Not` / `And` / `Or`. Вычисляется структурной рекурсией, слева направо,
//! с коротким замыканием. Дерево конечно, поэтому вычисление всегда завершается.

use core::fmt;
use std::sync::Arc;

use crate::domain::{Container, ContainerType, Containers, Element, Rank};

/// Всё, что видит ограничение при проверке хода.
#[derive(Clone, Copy, Debug)]
pub struct MoveContext<'a> {
    pub containers: &'a Containers,
    pub source_type: &'a ContainerType,
    pub source: &'a Container,
    pub target_type: Option<&'a ContainerType>,
    pub target: Option<&'a Container>,
    pub element: &'a Element,
}

/// О какой стопке спрашивает предикат.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveComponent {
    Source,
    Target,
}

impl<'a> MoveContext<'a> {
    fn component(&self, which: MoveComponent) -> Option<&'a Container> {
        match which {
            MoveComponent::Source => Some(self.source),
            MoveComponent::Target => self.target,
        }
    }
}

/// Предикат, который задаёт конкретная вариация (например, своя проверка смежности).
#[derive(Clone)]
pub struct CustomPredicate {
    pub name: String,
    check: Arc<dyn Fn(&MoveContext<'_>) -> bool + Send + Sync>,
}

impl CustomPredicate {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&MoveContext<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }
}

impl fmt::Debug for CustomPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomPredicate").field(&self.name).finish()
    }
}

/// Базовые предикаты. Если предикат спрашивает про цель, а цели нет: он ложен.
#[derive(Clone, Debug)]
pub enum Predicate {
    IsEmpty(MoveComponent),
    /// В стопке не меньше n карт.
    MinCards(MoveComponent, usize),
    TopFaceUp(MoveComponent),
    TopFaceDown(MoveComponent),
    /// В элементе ровно n карт.
    ElementSize(usize),
    MaxElementSize(usize),
    /// Все карты элемента открыты.
    ElementFaceUp,
    /// Нижняя карта элемента имеет этот ранг.
    BottomRank(Rank),
    /// Нижняя карта элемента на ранг выше верхней карты цели.
    RankAboveTarget,
    /// Нижняя карта элемента на ранг ниже верхней карты цели.
    RankBelowTarget,
    SameSuitAsTarget,
    OppositeColorToTarget,
    /// Элемент: убывающая серия с чередованием цветов.
    ElementDescendingAlternating,
    Custom(CustomPredicate),
}

impl Predicate {
    pub fn evaluate(&self, ctx: &MoveContext<'_>) -> bool {
        let target_top = || ctx.target.and_then(Container::top);
        let bottom = ctx.element.bottom();

        match self {
            Predicate::IsEmpty(which) => ctx.component(*which).is_some_and(Container::is_empty),
            Predicate::MinCards(which, n) => ctx.component(*which).is_some_and(|c| c.len() >= *n),
            Predicate::TopFaceUp(which) => ctx
                .component(*which)
                .and_then(Container::top)
                .is_some_and(|c| c.face_up),
            Predicate::TopFaceDown(which) => ctx
                .component(*which)
                .and_then(Container::top)
                .is_some_and(|c| !c.face_up),
            Predicate::ElementSize(n) => ctx.element.len() == *n,
            Predicate::MaxElementSize(n) => ctx.element.len() <= *n,
            Predicate::ElementFaceUp => ctx.element.cards().iter().all(|c| c.face_up),
            Predicate::BottomRank(rank) => bottom.is_some_and(|c| c.rank == *rank),
            Predicate::RankAboveTarget => match (bottom, target_top()) {
                (Some(b), Some(t)) => t.rank.next() == Some(b.rank),
                _ => false,
            },
            Predicate::RankBelowTarget => match (bottom, target_top()) {
                (Some(b), Some(t)) => b.rank.next() == Some(t.rank),
                _ => false,
            },
            Predicate::SameSuitAsTarget => match (bottom, target_top()) {
                (Some(b), Some(t)) => b.suit == t.suit,
                _ => false,
            },
            Predicate::OppositeColorToTarget => match (bottom, target_top()) {
                (Some(b), Some(t)) => b.is_red() != t.is_red(),
                _ => false,
            },
            Predicate::ElementDescendingAlternating => ctx
                .element
                .cards()
                .windows(2)
                .all(|w| w[1].rank.next() == Some(w[0].rank) && w[0].is_red() != w[1].is_red()),
            Predicate::Custom(custom) => (custom.check)(ctx),
        }
    }
}

/// Составное ограничение.
#[derive(Clone, Debug)]
pub enum Constraint {
    /// Всегда истинно.
    Always,
    Leaf(Predicate),
    Not(Box<Constraint>),
    /// Пустой `And` истинен.
    And(Vec<Constraint>),
    /// Пустой `Or` ложен.
    Or(Vec<Constraint>),
}

impl Constraint {
    pub fn evaluate(&self, ctx: &MoveContext<'_>) -> bool {
        match self {
            Constraint::Always => true,
            Constraint::Leaf(p) => p.evaluate(ctx),
            Constraint::Not(inner) => !inner.evaluate(ctx),
            Constraint::And(items) => items.iter().all(|c| c.evaluate(ctx)),
            Constraint::Or(items) => items.iter().any(|c| c.evaluate(ctx)),
        }
    }

    pub fn not(inner: Constraint) -> Self {
        Constraint::Not(Box::new(inner))
    }

    pub fn and(items: impl IntoIterator<Item = Constraint>) -> Self {
        Constraint::And(items.into_iter().collect())
    }

    pub fn or(items: impl IntoIterator<Item = Constraint>) -> Self {
        Constraint::Or(items.into_iter().collect())
    }

    pub fn is_empty(which: MoveComponent) -> Self {
        Constraint::Leaf(Predicate::IsEmpty(which))
    }

    pub fn custom<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&MoveContext<'_>) -> bool + Send + Sync + 'static,
    {
        Constraint::Leaf(Predicate::Custom(CustomPredicate::new(name, check)))
    }
}

impl From<Predicate> for Constraint {
    fn from(p: Predicate) -> Self {
        Constraint::Leaf(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Card, Placement, Suit};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ctx_fixture() -> (Containers, Element) {
        let mut containers = Containers::new();
        containers
            .insert("Src".into(), Container::with_cards(Placement::Hidden, vec![Card::new(Rank::Two, Suit::Hearts)]))
            .unwrap();
        containers
            .insert("Dst".into(), Container::with_cards(Placement::Hidden, vec![Card::new(Rank::Ace, Suit::Hearts)]))
            .unwrap();
        (containers, Element::Card(Card::new(Rank::Two, Suit::Hearts)))
    }

    #[test]
    fn combinators_short_circuit_left_to_right() {
        let (containers, element) = ctx_fixture();
        let src: ContainerType = "Src".into();
        let dst: ContainerType = "Dst".into();
        let ctx = MoveContext {
            containers: &containers,
            source_type: &src,
            source: containers.get(&src).unwrap(),
            target_type: Some(&dst),
            target: containers.get(&dst),
            element: &element,
        };

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counting = Constraint::custom("count", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        let and = Constraint::and([Constraint::is_empty(MoveComponent::Source), counting.clone()]);
        assert!(!and.evaluate(&ctx));
        let or = Constraint::or([Predicate::RankAboveTarget.into(), counting]);
        assert!(or.evaluate(&ctx));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(Constraint::And(vec![]).evaluate(&ctx));
        assert!(!Constraint::Or(vec![]).evaluate(&ctx));
        assert!(Constraint::not(Constraint::is_empty(MoveComponent::Target)).evaluate(&ctx));
    }
}
