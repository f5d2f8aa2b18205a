// src/bin/solitaire_dev_cli.rs

use solitaire_engine::api::{build_container_view, build_variation_view};
use solitaire_engine::engine::{SessionManager, TriggerEvent, TriggerOutcome};
use solitaire_engine::infra::{DeterministicRng, EngineConfig, SessionId};
use solitaire_engine::variation::{klondike, DealByThree, VariationDef};

fn main() {
    println!("solitaire_dev_cli: стартуем dev-CLI (DealByThree)…");

    // 1. Конфиг: из первого аргумента (путь к JSON) или по умолчанию.
    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| EngineConfig::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(c) => c,
            Err(e) => {
                println!("[CLI] Не удалось прочитать конфиг {path}: {e}");
                return;
            }
        },
        None => EngineConfig::default(),
    };

    // 2. Вариация
    let variation = match DealByThree::new(config.geometry, 3).build() {
        Ok(v) => v,
        Err(e) => {
            println!("[CLI] ОШИБКА сборки вариации: {e}");
            return;
        }
    };

    // 3. Менеджер партий и раздача
    let mut manager = SessionManager::new(config);
    let id = manager.open_session(variation);
    let mut rng = DeterministicRng::from_seed(42);

    match manager.start(id, &mut rng) {
        Ok(report) => println!(
            "[CLI] Раздача: {} шагов, {} карт перенесено.",
            report.steps, report.cards_moved
        ),
        Err(e) => {
            println!("[CLI] ОШИБКА раздачи: {e:?}");
            return;
        }
    }

    print_view(&manager, id);

    // 4. Несколько нажатий на колоду
    for round in 1..=10 {
        let event = TriggerEvent::press(klondike::STOCK);
        match manager.handle(id, &event) {
            Ok(TriggerOutcome::Applied { applied, automoves }) => {
                let cards: Vec<String> = applied.cards.iter().map(|c| c.to_string()).collect();
                println!(
                    "[CLI] #{round}: {} -> [{}], автоходов: {}",
                    applied.name,
                    cards.join(" "),
                    automoves.count()
                );
                for m in &automoves.applied {
                    println!("        auto: {} ({} -> {:?})", m.name, m.source, m.targets);
                }
            }
            Ok(TriggerOutcome::NoMoveApplied) => {
                println!("[CLI] #{round}: ход не применён (в колоде не хватает карт).");
            }
            Err(e) => {
                println!("[CLI] #{round}: ОШИБКА {e:?}");
                break;
            }
        }
    }

    if let Some(session) = manager.session(id) {
        if let Some(waste) = session.container(&klondike::WASTE.into()) {
            let view = build_container_view(&klondike::WASTE.into(), waste);
            println!("[CLI] Отбой: {}", serde_json::to_string(&view).unwrap_or_default());
        }
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

fn print_view(manager: &SessionManager, id: SessionId) {
    let Some(session) = manager.session(id) else {
        println!("[CLI] Партия {id} не найдена.");
        return;
    };
    let view = build_variation_view(session);
    println!("=== {} (min size {}x{}) ===", view.name, view.minimum_size.width, view.minimum_size.height);
    for c in &view.containers {
        let codes: Vec<String> = c
            .cards
            .iter()
            .map(|card| card.code.clone().unwrap_or_else(|| "##".into()))
            .collect();
        println!("{:>14}: {}", c.name, codes.join(" "));
    }
}
