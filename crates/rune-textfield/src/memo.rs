use std::cell::Cell;

/// Single-slot cache keyed by the owner's state revision.
#[derive(Debug, Default)]
pub(crate) struct Memo<T: Copy> {
    slot: Cell<Option<(u64, T)>>,
}

impl<T: Copy> Memo<T> {
    pub(crate) fn new() -> Self {
        Self {
            slot: Cell::new(None),
        }
    }

    /// Cached value for `revision`, computing it on a miss.
    pub(crate) fn get_or_compute(&self, revision: u64, compute: impl FnOnce() -> T) -> T {
        if let Some((cached_at, value)) = self.slot.get() {
            if cached_at == revision {
                return value;
            }
        }
        let value = compute();
        self.slot.set(Some((revision, value)));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomputes_only_on_new_revision() {
        let memo = Memo::new();
        let mut calls = 0;
        assert_eq!(memo.get_or_compute(1, || { calls += 1; 10 }), 10);
        assert_eq!(memo.get_or_compute(1, || { calls += 1; 20 }), 10);
        assert_eq!(memo.get_or_compute(2, || { calls += 1; 30 }), 30);
        assert_eq!(calls, 2);
    }
}
