// Call activation: owns the trailing arguments of one variadic call

use std::cell::Cell;

use crate::cursor::Cursor;
use crate::value::ArgValue;

/// The trailing argument sequence of a single variadic invocation.
///
/// The sequence is fixed when the activation is created and never changes.
/// Cursors borrow the activation, so none of them can outlive it, and the
/// activation keeps count of the cursors that are still open.
#[derive(Debug)]
pub struct Activation {
    args: Vec<ArgValue>,
    open: Cell<usize>,
}

impl Activation {
    pub fn new(args: Vec<ArgValue>) -> Self {
        Self {
            args,
            open: Cell::new(0),
        }
    }

    /// Open a cursor positioned at the first trailing argument
    pub fn start(&self) -> Cursor<'_> {
        Cursor::open(self)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ArgValue> {
        self.args.get(index)
    }

    pub fn args(&self) -> &[ArgValue] {
        &self.args
    }

    /// Number of cursors over this activation that have not been released
    pub fn open_cursors(&self) -> usize {
        self.open.get()
    }

    pub(crate) fn acquire(&self) {
        self.open.set(self.open.get() + 1);
    }

    pub(crate) fn release(&self) {
        self.open.set(self.open.get().saturating_sub(1));
    }
}

impl From<Vec<ArgValue>> for Activation {
    fn from(args: Vec<ArgValue>) -> Self {
        Self::new(args)
    }
}

impl FromIterator<ArgValue> for Activation {
    fn from_iter<I: IntoIterator<Item = ArgValue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_count_follows_cursors() {
        let va = Activation::new(vec![ArgValue::Int(1)]);
        assert_eq!(va.open_cursors(), 0);
        {
            let _a = va.start();
            let _b = va.start();
            assert_eq!(va.open_cursors(), 2);
        }
        assert_eq!(va.open_cursors(), 0);
    }

    #[test]
    fn test_collect_from_values() {
        let va: Activation = [1.0, 2.0, 3.0].into_iter().map(ArgValue::from).collect();
        assert_eq!(va.len(), 3);
        assert_eq!(va.get(0), Some(&ArgValue::Double(1.0)));
        assert_eq!(va.get(3), None);
    }
}
