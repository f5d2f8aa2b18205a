//! Резолвер автоходов.
//!
//! `Idle → Scanning → Applying → Scanning → … → Idle`.
//! Сканирование идёт по ходам с флагом `automove` в порядке объявления;
//! первый применимый выполняется, и сканирование начинается заново.
//! Полный проход без применимых ходов: неподвижная точка.
//!
//! Завершение гарантировано, только если автоходы монотонны; движок
//! этого не доказывает и ограничивает число применений `limit`.

use serde::{Deserialize, Serialize};

use log::{debug, info, warn};

use crate::domain::Containers;
use crate::engine::errors::EngineError;
use crate::engine::moves::AppliedMove;
use crate::engine::rules::Rules;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolverState {
    Idle,
    Scanning,
    Applying,
}

/// Что сделал резолвер за один запуск.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AutoMoveReport {
    pub applied: Vec<AppliedMove>,
}

impl AutoMoveReport {
    pub fn count(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.applied.iter().map(|m| m.name.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct AutoMoveResolver {
    limit: usize,
    state: ResolverState,
}

impl AutoMoveResolver {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            state: ResolverState::Idle,
        }
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Применять автоходы до неподвижной точки.
    pub fn run(&mut self, rules: &Rules, containers: &mut Containers) -> Result<AutoMoveReport, EngineError> {
        let mut report = AutoMoveReport::default();
        self.run_into(rules, containers, &mut report)?;
        Ok(report)
    }

    /// То же, что `run`, но применённые ходы копятся в `report`
    /// и остаются в нём, даже если запуск закончился ошибкой.
    pub fn run_into(
        &mut self,
        rules: &Rules,
        containers: &mut Containers,
        report: &mut AutoMoveReport,
    ) -> Result<(), EngineError> {
        let result = self.scan(rules, containers, report);
        self.state = ResolverState::Idle;
        result
    }

    fn scan(&mut self, rules: &Rules, containers: &mut Containers, report: &mut AutoMoveReport) -> Result<(), EngineError> {
        let start = report.count();

        'scan: loop {
            self.state = ResolverState::Scanning;

            for (_, m) in rules.automoves() {
                let plan = match m.prepare(containers, None, None) {
                    Ok(Some(plan)) => plan,
                    Ok(None) => continue,
                    Err(e) if e.is_rejection() => {
                        debug!("automove {} skipped: {}", m.name, e);
                        continue;
                    }
                    Err(e) => return Err(e),
                };

                if report.count() - start >= self.limit {
                    warn!("automoves did not settle after {} applications", self.limit);
                    return Err(EngineError::AutoMoveLimitExceeded(self.limit));
                }

                self.state = ResolverState::Applying;
                let applied = m.execute(containers, plan, None)?;
                debug!("automove {} applied ({} card(s))", applied.name, applied.cards.len());
                report.applied.push(applied);
                continue 'scan;
            }

            break;
        }

        if report.count() > start {
            info!("automoves reached fixpoint after {} application(s)", report.count() - start);
        }
        Ok(())
    }
}
