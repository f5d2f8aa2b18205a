// tests/domain_test.rs

use solitaire_engine::domain::{
    minimum_size, Card, Container, ContainerType, Containers, Deck, Dimension, Element, Placement, Rank, Reveal, Suit,
    Widget,
};
use solitaire_engine::engine::EngineError;

//
// ---------- helpers ----------
//

fn card(code: &str) -> Card {
    code.parse().expect("valid card code")
}

fn up(code: &str) -> Card {
    card(code).face_up()
}

fn pile(cards: Vec<Card>) -> Container {
    Container::with_cards(Placement::Hidden, cards)
}

//
// ---------- card / deck ----------
//

#[test]
fn card_display_and_parse_roundtrip() {
    let c = Card::new(Rank::Ten, Suit::Diamonds);
    assert_eq!(c.to_string(), "Td");
    assert_eq!(card("Td"), c);
    assert_eq!(card("ah").rank, Rank::Ace);

    assert!("A".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
}

#[test]
fn face_state_does_not_change_identity() {
    let down = card("Qs");
    let open = down.face_up();
    assert_ne!(down, open);
    assert!(down.same_card(&open));
    assert!(card("Qh").is_red());
    assert!(!card("Qc").is_red());
}

#[test]
fn multi_deck_ids_do_not_overlap() {
    let deck = Deck::multi(2);
    assert_eq!(deck.len(), 104);

    let mut ids: Vec<_> = deck.cards.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 104);
    assert!(deck.cards.iter().all(|c| !c.face_up));
}

#[test]
fn standard_deck_top_is_king_of_spades() {
    let mut deck = Deck::standard_52();
    assert_eq!(deck.draw_one(), Some(card("Ks")));
    assert_eq!(deck.take_all().len(), 51);
    assert!(deck.is_empty());
}

//
// ---------- container ----------
//

#[test]
fn top_element_takes_cards_from_the_end() {
    let c = pile(vec![card("Ks"), up("9h"), up("8s")]);

    assert_eq!(c.top_element(1).unwrap(), Element::Card(up("8s")));
    assert_eq!(c.top_element(2).unwrap(), Element::Run(vec![up("9h"), up("8s")]));
    assert_eq!(c.face_up_run_len(), 2);
    // контейнер не изменился
    assert_eq!(c.len(), 3);
}

#[test]
fn top_element_reports_insufficient_cards() {
    let c = pile(vec![card("2c")]);
    assert_eq!(
        c.top_element(3),
        Err(EngineError::InsufficientCards { needed: 3, available: 1 })
    );
    assert!(matches!(c.top_element(0), Err(EngineError::InsufficientCards { .. })));
    assert!(matches!(pile(vec![]).top_element(1), Err(EngineError::InsufficientCards { .. })));
}

#[test]
fn remove_requires_element_on_top() {
    let mut c = pile(vec![card("Ac"), card("2c"), card("3c")]);

    let err = c.remove(&Element::Card(card("2c"))).unwrap_err();
    assert!(matches!(err, EngineError::InvariantViolation(_)));
    assert_eq!(c.len(), 3);

    let removed = c.remove(&Element::Run(vec![card("2c"), card("3c")])).unwrap();
    assert_eq!(removed.len(), 2);
    assert_eq!(c.contents(), &[card("Ac")]);
}

#[test]
fn accept_appends_and_flip_top_changes_face() {
    let mut c = pile(vec![card("5d")]);
    c.accept(Element::Card(card("6d"))).unwrap();
    assert_eq!(c.top(), Some(&card("6d")));

    // та же карта второй раз (даже открытой) не принимается
    let err = c.accept(Element::Card(up("6d"))).unwrap_err();
    assert!(matches!(err, EngineError::InvariantViolation(_)));
    assert_eq!(c.len(), 2);

    assert!(c.flip_top(true));
    assert!(c.top().unwrap().face_up);
    assert!(!pile(vec![]).flip_top(true));
}

//
// ---------- containers ----------
//

fn three_piles() -> Containers {
    let mut cs = Containers::new();
    cs.insert("Src".into(), pile(vec![card("Ac"), card("2c"), card("3c"), card("4c")]))
        .unwrap();
    cs.insert("A".into(), pile(vec![])).unwrap();
    cs.insert("B".into(), pile(vec![card("Kh")])).unwrap();
    cs
}

#[test]
fn duplicate_and_unknown_containers_are_errors() {
    let mut cs = three_piles();
    assert_eq!(
        cs.insert("A".into(), pile(vec![])),
        Err(EngineError::DuplicateContainer(ContainerType::new("A")))
    );
    assert!(matches!(
        cs.require(&"Nope".into()),
        Err(EngineError::UnknownContainer(_))
    ));
    assert!(cs.by_name("B").is_some());
    let names: Vec<&str> = cs.names().map(|n| n.name()).collect();
    assert_eq!(names, vec!["Src", "A", "B"]);
}

#[test]
fn transfer_moves_successive_top_chunks() {
    let mut cs = three_piles();
    let plan = vec![
        (ContainerType::new("A"), Element::Card(card("4c"))),
        (ContainerType::new("B"), Element::Run(vec![card("2c"), card("3c")])),
    ];

    cs.transfer(&"Src".into(), &plan, Reveal::FaceUp).unwrap();

    assert_eq!(cs.get(&"Src".into()).unwrap().contents(), &[card("Ac")]);
    assert_eq!(cs.get(&"A".into()).unwrap().contents(), &[up("4c")]);
    assert_eq!(cs.get(&"B".into()).unwrap().contents(), &[card("Kh"), up("2c"), up("3c")]);
    assert_eq!(cs.total_cards(), 5);
}

#[test]
fn transfer_moves_the_cards_taken_from_the_source() {
    let mut cs = three_piles();
    // в плане карта с тем же id, но другим лицом и рангом
    let copy = Card {
        rank: Rank::King,
        face_up: true,
        ..card("4c")
    };
    cs.transfer(&"Src".into(), &[(ContainerType::new("A"), Element::Card(copy))], Reveal::Keep)
        .unwrap();
    assert_eq!(cs.get(&"A".into()).unwrap().contents(), &[card("4c")]);
}

#[test]
fn failed_transfer_leaves_everything_untouched() {
    let mut cs = three_piles();
    let before = cs.clone();

    // второй кусок не лежит сразу под первым
    let plan = vec![
        (ContainerType::new("A"), Element::Card(card("4c"))),
        (ContainerType::new("B"), Element::Card(card("Ac"))),
    ];
    let err = cs.transfer(&"Src".into(), &plan, Reveal::Keep).unwrap_err();
    assert!(matches!(err, EngineError::InvariantViolation(_)));
    assert_eq!(cs, before);

    // неизвестная цель
    let plan = vec![(ContainerType::new("Nope"), Element::Card(card("4c")))];
    assert!(matches!(
        cs.transfer(&"Src".into(), &plan, Reveal::Keep),
        Err(EngineError::UnknownContainer(_))
    ));
    assert_eq!(cs, before);
}

#[test]
fn locate_finds_current_container_of_a_card() {
    let mut cs = three_piles();
    let four = card("4c");
    assert_eq!(cs.locate(four.id), Some(&ContainerType::new("Src")));

    let plan = vec![(ContainerType::new("A"), Element::Card(four))];
    cs.transfer(&"Src".into(), &plan, Reveal::Keep).unwrap();
    assert_eq!(cs.locate(four.id), Some(&ContainerType::new("A")));
    assert_eq!(cs.locate(card("Qd").id), None);
}

//
// ---------- layout ----------
//

#[test]
fn minimum_size_covers_all_widgets() {
    let placements = [
        Placement::Single(Widget::new(15, 20, 73, 97)),
        Placement::Single(Widget::new(103, 132, 73, 337)),
        Placement::Hidden,
    ];
    assert_eq!(
        minimum_size(placements.iter()),
        Dimension {
            width: 176,
            height: 469
        }
    );
    assert_eq!(minimum_size([&Placement::Hidden]), Dimension::default());
}
