use num_traits::Float;

use crate::{Point, determinant::Determinant};

/// The straight line between two endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a, T> {
    /// The first point in the segment.
    pub from: &'a Point<T>,
    /// The last point in the segment.
    pub to: &'a Point<T>,
}

/// The point at which two [`Segment`]s cross each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing<T> {
    /// The location of the crossing.
    pub point: Point<T>,
    /// The relative position of the crossing along the first segment, in `(0, 1)`.
    pub subject: T,
    /// The relative position of the crossing along the second segment, in `(0, 1)`.
    pub clip: T,
}

impl<'a, T> Segment<'a, T> {
    /// Returns the segment going from one endpoint to the other.
    pub fn new(from: &'a Point<T>, to: &'a Point<T>) -> Self {
        Self { from, to }
    }
}

impl<T> Segment<'_, T>
where
    T: Float,
{
    /// Returns the point at which self and rhs cross each other, if any.
    ///
    /// Parallel and collinear segments never cross. Neither do segments touching each other at
    /// an endpoint: if the crossing falls exactly at the start or the end of either segment
    /// while lying within the extent of the other one, it is discarded.
    pub fn intersection(&self, rhs: &Self) -> Option<Crossing<T>> {
        let determinant = Determinant::from([self, rhs]).into_inner();
        if determinant.is_zero() {
            return None;
        }

        let offset = Segment::new(rhs.from, self.from);
        let us = Determinant::from([rhs, &offset]).into_inner() / determinant;
        let uc = Determinant::from([self, &offset]).into_inner() / determinant;

        let is_endpoint = |t: T| t == T::zero() || t == T::one();
        let is_within = |t: T| t >= T::zero() && t <= T::one();
        if is_endpoint(us) && is_within(uc) || is_endpoint(uc) && is_within(us) {
            return None;
        }

        let is_inner = |t: T| t > T::zero() && t < T::one();
        if !is_inner(us) || !is_inner(uc) {
            return None;
        }

        Some(Crossing {
            point: Point {
                x: self.from.x + us * (self.to.x - self.from.x),
                y: self.from.y + us * (self.to.y - self.from.y),
            },
            subject: us,
            clip: uc,
        })
    }
}
