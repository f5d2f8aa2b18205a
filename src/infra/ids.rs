use std::sync::atomic::{AtomicU64, Ordering};

/// Идентификатор партии.
pub type SessionId = u64;

/// Простая генерация ID на основе монотонного счётчика.
#[derive(Debug)]
pub struct IdGenerator {
    session_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1.
    pub fn new() -> Self {
        Self {
            session_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_session_id(&self) -> SessionId {
        self.session_counter.fetch_add(1, Ordering::Relaxed)
    }
}
