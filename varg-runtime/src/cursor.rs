//! Cursors over a call activation's trailing arguments
//!
//! A cursor is a `(activation, offset)` pair. Extraction reads the slot at the
//! offset, checks its tag against the requested type and advances by one.
//! Duplicating copies the pair, restarting resets the offset, and dropping
//! the cursor releases it.

use crate::activation::Activation;
use crate::value::{ArgKind, FromArg};
use crate::{VarargError, VarargResult};

#[derive(Debug)]
pub struct Cursor<'a> {
    activation: &'a Activation,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Open a cursor at the first trailing slot of `activation`
    pub fn open(activation: &'a Activation) -> Self {
        activation.acquire();
        log::debug!(
            "cursor opened over {} trailing argument(s)",
            activation.len()
        );
        Self {
            activation,
            offset: 0,
        }
    }

    /// Extract the next argument as `T` and advance past it.
    ///
    /// On failure the cursor stays where it was.
    pub fn arg<T: FromArg<'a>>(&mut self) -> VarargResult<T> {
        let activation: &'a Activation = self.activation;
        let index = self.offset;
        let slot = activation
            .get(index)
            .ok_or(VarargError::OutOfArguments {
                index,
                supplied: activation.len(),
            })?;

        if slot.kind() != T::KIND {
            return Err(VarargError::TypeMismatch {
                index,
                expected: T::KIND,
                found: slot.kind(),
            });
        }
        let value = T::from_arg(slot).ok_or_else(|| VarargError::OutOfRange {
            index,
            kind: slot.kind(),
            value: slot.to_string(),
            target: std::any::type_name::<T>(),
        })?;

        log::trace!("extracted {} from slot {}", slot.kind(), index);
        self.offset += 1;
        Ok(value)
    }

    /// Tag of the next argument, without advancing
    pub fn peek_kind(&self) -> Option<ArgKind> {
        self.activation.get(self.offset).map(|v| v.kind())
    }

    /// Index of the next slot to be extracted
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Number of slots not yet extracted
    pub fn remaining(&self) -> usize {
        self.activation.len().saturating_sub(self.offset)
    }

    /// Open an independent cursor at the same position.
    ///
    /// Both cursors advance separately and both are released on their own.
    pub fn duplicate(&self) -> Cursor<'a> {
        self.activation.acquire();
        log::debug!("cursor duplicated at slot {}", self.offset);
        Cursor {
            activation: self.activation,
            offset: self.offset,
        }
    }

    /// Reposition at the first trailing slot, as if freshly opened.
    ///
    /// `activation` must be the one the cursor was opened over; a cursor never
    /// moves to another argument sequence.
    pub fn restart(&mut self, activation: &Activation) -> VarargResult<()> {
        if !std::ptr::eq(self.activation, activation) {
            return Err(VarargError::ForeignActivation);
        }
        log::debug!("cursor restarted (was at slot {})", self.offset);
        self.offset = 0;
        Ok(())
    }

    /// Release the cursor. Equivalent to dropping it.
    pub fn close(self) {}
}

impl Clone for Cursor<'_> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl Drop for Cursor<'_> {
    fn drop(&mut self) {
        self.activation.release();
        log::debug!("cursor closed at slot {}", self.offset);
    }
}
