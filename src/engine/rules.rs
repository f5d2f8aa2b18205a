use crate::engine::errors::EngineError;
use crate::engine::moves::Move;
use crate::engine::trigger::TriggerKind;

/// Реестр ходов: по упорядоченному списку на каждый тип жеста.
///
/// Переопределение хода базовой вариации делается только явно:
/// удалить по имени и добавить замену. Неявного затенения нет.
#[derive(Clone, Debug, Default)]
pub struct Rules {
    press: Vec<Move>,
    click: Vec<Move>,
    drag: Vec<Move>,
    /// Общий порядок объявления по всем спискам.
    declared: Vec<(TriggerKind, String)>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket(&self, trigger: TriggerKind) -> &Vec<Move> {
        match trigger {
            TriggerKind::Press => &self.press,
            TriggerKind::Click => &self.click,
            TriggerKind::Drag => &self.drag,
        }
    }

    fn bucket_mut(&mut self, trigger: TriggerKind) -> &mut Vec<Move> {
        match trigger {
            TriggerKind::Press => &mut self.press,
            TriggerKind::Click => &mut self.click,
            TriggerKind::Drag => &mut self.drag,
        }
    }

    /// Добавить ход в конец списка. Имя уникально внутри списка.
    pub fn add_move(&mut self, trigger: TriggerKind, m: Move) -> Result<(), EngineError> {
        m.validate()?;
        if self.find(trigger, &m.name).is_some() {
            return Err(EngineError::DuplicateMove {
                trigger,
                name: m.name,
            });
        }
        self.declared.push((trigger, m.name.clone()));
        self.bucket_mut(trigger).push(m);
        Ok(())
    }

    /// Удалить ход по имени и вернуть его.
    pub fn remove_move(&mut self, trigger: TriggerKind, name: &str) -> Result<Move, EngineError> {
        let bucket = self.bucket_mut(trigger);
        match bucket.iter().position(|m| m.name == name) {
            Some(idx) => {
                let removed = bucket.remove(idx);
                self.declared.retain(|(t, n)| !(*t == trigger && n == name));
                Ok(removed)
            }
            None => Err(EngineError::MoveNotFound {
                trigger,
                name: name.to_string(),
            }),
        }
    }

    /// Переопределение: remove + add. Замена встаёт в конец списка.
    pub fn replace_move(
        &mut self,
        trigger: TriggerKind,
        name: &str,
        replacement: Move,
    ) -> Result<Move, EngineError> {
        // Все проверки до удаления: при ошибке реестр не меняется.
        replacement.validate()?;
        if replacement.name != name && self.find(trigger, &replacement.name).is_some() {
            return Err(EngineError::DuplicateMove {
                trigger,
                name: replacement.name,
            });
        }
        let old = self.remove_move(trigger, name)?;
        self.declared.push((trigger, replacement.name.clone()));
        self.bucket_mut(trigger).push(replacement);
        Ok(old)
    }

    pub fn moves(&self, trigger: TriggerKind) -> &[Move] {
        self.bucket(trigger)
    }

    pub fn find(&self, trigger: TriggerKind, name: &str) -> Option<&Move> {
        self.bucket(trigger).iter().find(|m| m.name == name)
    }

    /// Все ходы в порядке press, click, drag, внутри списка по порядку регистрации.
    pub fn all(&self) -> impl Iterator<Item = (TriggerKind, &Move)> {
        TriggerKind::ALL
            .into_iter()
            .flat_map(move |t| self.bucket(t).iter().map(move |m| (t, m)))
    }

    /// Ходы, которые резолвер автоходов может применять сам,
    /// в общем порядке объявления (замена считается объявленной заново).
    pub fn automoves(&self) -> impl Iterator<Item = (TriggerKind, &Move)> {
        self.declared
            .iter()
            .filter_map(move |(t, name)| self.find(*t, name).map(|m| (*t, m)))
            .filter(|(_, m)| m.automove)
    }

    pub fn len(&self) -> usize {
        self.press.len() + self.click.len() + self.drag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
