// tests/engine_error_tests.rs

use solitaire_engine::api::ApiError;
use solitaire_engine::domain::ContainerType;
use solitaire_engine::engine::{EngineError, ManagerError, SessionManager, TriggerEvent, TriggerKind};
use solitaire_engine::infra::EngineConfig;

#[test]
fn configuration_errors_are_classified() {
    let configuration = [
        EngineError::DuplicateContainer("A".into()),
        EngineError::UnknownContainer("A".into()),
        EngineError::DuplicateMove {
            trigger: TriggerKind::Click,
            name: "M".into(),
        },
        EngineError::MoveNotFound {
            trigger: TriggerKind::Drag,
            name: "M".into(),
        },
        EngineError::MalformedMove {
            name: "M".into(),
            reason: "no targets".into(),
        },
        EngineError::MalformedDeal("x".into()),
        EngineError::InvalidConfig("x".into()),
        EngineError::AutoMoveLimitExceeded(5),
    ];
    for err in &configuration {
        assert!(err.is_configuration(), "{err:?}");
    }

    let runtime = [
        EngineError::InsufficientCards { needed: 3, available: 1 },
        EngineError::NoLegalTarget,
        EngineError::InvariantViolation("x".into()),
        EngineError::Internal("x"),
    ];
    for err in &runtime {
        assert!(!err.is_configuration(), "{err:?}");
    }
}

#[test]
fn errors_render_their_context() {
    let err = EngineError::InsufficientCards { needed: 3, available: 1 };
    let text = err.to_string();
    assert!(text.contains('3') && text.contains('1'), "{text}");

    let err = EngineError::UnknownContainer(ContainerType::new("Tableau-9"));
    assert!(err.to_string().contains("Tableau-9"));
}

#[test]
fn engine_errors_map_to_api_errors() {
    assert_eq!(
        ApiError::from(EngineError::UnknownContainer("Waste".into())),
        ApiError::UnknownContainer("Waste".into())
    );
    assert_eq!(
        ApiError::from(EngineError::Internal("boom")),
        ApiError::Internal("boom".into())
    );
    assert!(matches!(
        ApiError::from(EngineError::NoLegalTarget),
        ApiError::EngineError(_)
    ));
}

#[test]
fn manager_reports_missing_session() {
    let mut manager = SessionManager::new(EngineConfig::default());
    match manager.handle(42, &TriggerEvent::press("Stock")) {
        Err(ManagerError::SessionNotFound(id)) => assert_eq!(id, 42),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(manager.is_empty());
}
