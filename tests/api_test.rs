// tests/api_test.rs

use solitaire_engine::api::{
    execute_command, handle_query, parse_command, ApiError, Command, Query, QueryResponse, TriggerCommand,
};
use solitaire_engine::domain::{Container, ElementKind, Placement, Reveal};
use solitaire_engine::engine::{DealStep, GameSession, Move, MoveComponent, Predicate, TriggerKind};
use solitaire_engine::infra::EngineConfig;
use solitaire_engine::variation::{klondike, Klondike, VariationBuilder, VariationDef};

fn started_klondike() -> GameSession {
    let mut session = GameSession::new(Klondike::default().build().unwrap(), &EngineConfig::default());
    execute_command(&mut session, &Command::Start { seed: Some(7) }).unwrap();
    session
}

fn press_stock() -> Command {
    Command::Trigger(TriggerCommand {
        kind: TriggerKind::Press,
        source: klondike::STOCK.into(),
        target: None,
        dragged_count: None,
    })
}

#[test]
fn variation_view_lists_every_container() {
    let session = started_klondike();
    let QueryResponse::Variation(view) = handle_query(&session, &Query::GetVariation).unwrap() else {
        panic!("expected variation view");
    };

    assert_eq!(view.name, "Klondike");
    assert!(view.dealt);
    assert!(view.automoves);
    assert_eq!(view.containers.len(), 2 + klondike::FOUNDATIONS + klondike::TABLEAU_COLUMNS);
    assert_eq!(view.containers.iter().map(|c| c.cards.len()).sum::<usize>(), 52);
    assert!(view.containers.iter().all(|c| c.widgets.len() == 1));
    assert!(view.minimum_size.width > 0 && view.minimum_size.height > 0);
}

#[test]
fn face_down_cards_hide_their_code() {
    let session = started_klondike();
    let QueryResponse::Container(stock) = handle_query(
        &session,
        &Query::GetContainer {
            name: klondike::STOCK.into(),
        },
    )
    .unwrap() else {
        panic!("expected container view");
    };

    assert_eq!(stock.name, "Stock");
    assert_eq!(stock.cards.len(), 24);
    assert!(stock.cards.iter().all(|c| !c.face_up && c.code.is_none()));
}

#[test]
fn unknown_container_query_is_reported() {
    let session = started_klondike();
    let err = handle_query(
        &session,
        &Query::GetContainer {
            name: "Tableau-99".into(),
        },
    )
    .unwrap_err();
    assert_eq!(err, ApiError::UnknownContainer("Tableau-99".into()));
}

#[test]
fn minimum_size_query_matches_view() {
    let session = started_klondike();
    let QueryResponse::MinimumSize(size) = handle_query(&session, &Query::MinimumSize).unwrap() else {
        panic!("expected minimum size");
    };
    assert_eq!(size, session.variation().minimum_size());
}

#[test]
fn press_on_stock_deals_to_waste() {
    let mut session = started_klondike();
    let result = execute_command(&mut session, &press_stock()).unwrap();
    assert_eq!(result.applied.as_deref(), Some("DealDeck"));

    let stock = session.container(&klondike::STOCK.into()).unwrap();
    assert_eq!(stock.len(), 23);

    let QueryResponse::History(history) = handle_query(&session, &Query::History).unwrap() else {
        panic!("expected history");
    };
    assert!(history.applied_moves() >= 1);
}

#[test]
fn commands_parse_from_json() {
    let json = r#"{ "Trigger": { "kind": "Click", "source": "Waste", "target": null, "dragged_count": null } }"#;
    match parse_command(json).unwrap() {
        Command::Trigger(cmd) => {
            assert_eq!(cmd.kind, TriggerKind::Click);
            assert_eq!(cmd.source, "Waste");
        }
        other => panic!("unexpected command: {other:?}"),
    }

    assert!(matches!(
        parse_command(r#"{ "Start": { "seed": 3 } }"#).unwrap(),
        Command::Start { seed: Some(3) }
    ));
    assert!(matches!(parse_command("{ oops"), Err(ApiError::BadRequest(_))));
}

#[test]
fn trigger_command_validates_names_and_drag_size() {
    let mut session = started_klondike();

    let unknown = Command::Trigger(TriggerCommand {
        kind: TriggerKind::Press,
        source: "Nowhere".into(),
        target: None,
        dragged_count: None,
    });
    assert_eq!(
        execute_command(&mut session, &unknown).unwrap_err(),
        ApiError::UnknownContainer("Nowhere".into())
    );

    let too_many = Command::Trigger(TriggerCommand {
        kind: TriggerKind::Drag,
        source: klondike::WASTE.into(),
        target: Some("Tableau-1".into()),
        dragged_count: Some(5),
    });
    assert!(matches!(
        execute_command(&mut session, &too_many),
        Err(ApiError::BadRequest(_))
    ));

    let bad_target = Command::Trigger(TriggerCommand {
        kind: TriggerKind::Drag,
        source: klondike::WASTE.into(),
        target: Some("Tableau-0".into()),
        dragged_count: None,
    });
    assert_eq!(
        execute_command(&mut session, &bad_target).unwrap_err(),
        ApiError::UnknownContainer("Tableau-0".into())
    );
}

#[test]
fn second_start_is_an_internal_error() {
    let mut session = started_klondike();
    let err = execute_command(&mut session, &Command::Start { seed: None }).unwrap_err();
    assert!(matches!(err, ApiError::Internal(_)));
}

#[test]
fn start_settles_automoves_after_the_deal() {
    let v = VariationBuilder::new("OpenTop")
        .container("Stock", Container::new(Placement::Hidden))
        .unwrap()
        .deal_step(DealStep::Fill {
            target: "Stock".into(),
            face_up: false,
        })
        .press_move(
            Move::press(
                "Flip",
                "Stock",
                "Stock",
                ElementKind::Card,
                Predicate::TopFaceDown(MoveComponent::Source).into(),
            )
            .with_reveal(Reveal::FaceUp)
            .as_automove(),
        )
        .unwrap()
        .automoves(true)
        .build()
        .unwrap();
    let mut session = GameSession::new(v, &EngineConfig::default());

    let result = execute_command(&mut session, &Command::Start { seed: Some(1) }).unwrap();
    assert_eq!(result.applied, None);
    assert_eq!(result.automoves, vec!["Flip".to_string()]);
    assert!(session.container(&"Stock".into()).unwrap().top().unwrap().face_up);
}
