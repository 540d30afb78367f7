use std::{cell::Cell, rc::Rc};

/// Tag handed out when a request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Lets only the most recently started request publish its result.
#[derive(Debug, Clone, Default)]
pub struct LatestOnly {
    current: Rc<Cell<u64>>,
}

impl LatestOnly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Generation {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        Generation(next)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.get() == generation.0
    }
}
