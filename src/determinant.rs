use std::ops::{Mul, Sub};

use crate::Segment;

/// The scalar value representing the determinant of a matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Determinant<T>(T);

impl<T> From<[&Segment<'_, T>; 2]> for Determinant<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Being `A` and `B` the given [`Segment`]s, returns the determinant of the matrix whose
    /// columns are the direction vectors of `A` and `B`.
    fn from([a, b]: [&Segment<'_, T>; 2]) -> Self {
        Self((a.to.x - a.from.x) * (b.to.y - b.from.y) - (b.to.x - b.from.x) * (a.to.y - a.from.y))
    }
}

impl<T> Determinant<T> {
    /// Returns the inner value of self.
    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}
