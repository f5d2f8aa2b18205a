// tests/infra_test.rs

use solitaire_engine::domain::{Deck, Geometry};
use solitaire_engine::engine::{EngineError, RandomSource};
use solitaire_engine::infra::{DeterministicRng, EngineConfig, IdGenerator, SystemRng};

//
// ---------- rng ----------
//

#[test]
fn deterministic_rng_repeats_shuffle_for_same_seed() {
    let mut a = Deck::standard_52();
    let mut b = Deck::standard_52();
    DeterministicRng::from_seed(7).shuffle(&mut a.cards);
    DeterministicRng::from_seed(7).shuffle(&mut b.cards);
    assert_eq!(a, b);

    let mut c = Deck::standard_52();
    DeterministicRng::from_seed(8).shuffle(&mut c.cards);
    assert_ne!(a, c);
}

#[test]
fn system_rng_keeps_every_card() {
    let mut deck = Deck::standard_52();
    SystemRng.shuffle(&mut deck.cards);

    let mut ids: Vec<_> = deck.cards.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..52).collect::<Vec<u16>>());
}

//
// ---------- ids ----------
//

#[test]
fn session_ids_are_monotonic() {
    let ids = IdGenerator::new();
    let a = ids.next_session_id();
    let b = ids.next_session_id();
    assert_eq!(a, 1);
    assert_eq!(b, 2);
}

//
// ---------- config ----------
//

#[test]
fn default_config_values() {
    let config = EngineConfig::default();
    assert_eq!(config.automove_limit, 1000);
    assert_eq!(
        config.geometry,
        Geometry {
            card_width: 73,
            card_height: 97,
            card_gap: 15,
            card_overlap: 20
        }
    );
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = EngineConfig::from_json(r#"{ "automove_limit": 50, "geometry": { "card_width": 80 } }"#).unwrap();
    assert_eq!(config.automove_limit, 50);
    assert_eq!(config.geometry.card_width, 80);
    assert_eq!(config.geometry.card_height, 97);

    let empty = EngineConfig::from_json("{}").unwrap();
    assert_eq!(empty, EngineConfig::default());
}

#[test]
fn config_json_roundtrip() {
    let config = EngineConfig {
        automove_limit: 7,
        ..EngineConfig::default()
    };
    let json = config.to_json().unwrap();
    assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
}

#[test]
fn invalid_config_is_rejected() {
    assert!(matches!(
        EngineConfig::from_json(r#"{ "automove_limit": 0 }"#),
        Err(EngineError::InvalidConfig(_))
    ));
    assert!(matches!(
        EngineConfig::from_json(r#"{ "geometry": { "card_height": 0 } }"#),
        Err(EngineError::InvalidConfig(_))
    ));
    assert!(matches!(
        EngineConfig::from_json("not json"),
        Err(EngineError::InvalidConfig(_))
    ));
}
