use crate::traits::Enumerated;
use std::iter::FusedIterator;

///
/// Members
///
/// Walks one full cycle of an `Enumerated` type via `next`.
///

pub struct Members<T> {
    current: Option<T>,
    remaining: usize,
}

/// Every declared member once, in declaration order.
#[must_use]
pub const fn members<T: Enumerated>() -> Members<T> {
    Members {
        current: Some(T::FIRST),
        remaining: T::LEN,
    }
}

/// One full cycle seeded from an arbitrary value.
///
/// The first item is `value.next()`; for a defined `value` the cycle ends
/// on `value` itself, for an undefined one it is `members()`.
#[must_use]
pub fn members_after<T: Enumerated>(value: &T) -> Members<T> {
    Members {
        current: Some(value.next()),
        remaining: T::LEN,
    }
}

impl<T: Enumerated> Iterator for Members<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.current.take()?;
        if self.remaining > 0 {
            self.current = Some(Enumerated::next(&current));
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Enumerated> ExactSizeIterator for Members<T> {}

impl<T: Enumerated> FusedIterator for Members<T> {}
