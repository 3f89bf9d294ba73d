use num_traits::Zero;

use crate::Point;

/// A node in the circular sequence of a boundary.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Vertex<T> {
    /// The location of the vertex.
    pub(crate) point: Point<T>,
    /// The position in the graph of the vertex following this one.
    pub(crate) next: usize,
    /// The position in the graph of the vertex previous to this one.
    pub(crate) previous: usize,
    /// The position in the graph of the complementary crossing in the other boundary, if this is
    /// an intersection.
    pub(crate) neighbour: Option<usize>,
    /// If true, the traversal continues forward from this intersection; otherwise backward.
    pub(crate) entry: bool,
    /// The relative position of the intersection along the original edge it subdivides.
    pub(crate) alpha: T,
    /// If true, this vertex was synthesized at a crossing between both boundaries.
    pub(crate) intersect: bool,
    /// If true, this vertex has already been consumed by the tracing.
    pub(crate) checked: bool,
}

impl<T> Vertex<T>
where
    T: Zero,
{
    /// Returns an original vertex at the given point, linked to nothing yet.
    pub(crate) fn new(point: Point<T>) -> Self {
        Self {
            point,
            next: usize::MAX,
            previous: usize::MAX,
            neighbour: None,
            entry: false,
            alpha: T::zero(),
            intersect: false,
            checked: false,
        }
    }
}

impl<T> Vertex<T> {
    /// Returns an intersection vertex at the given point and relative position along its edge.
    pub(crate) fn intersection(point: Point<T>, alpha: T) -> Self {
        Self {
            point,
            next: usize::MAX,
            previous: usize::MAX,
            neighbour: None,
            entry: false,
            alpha,
            intersect: true,
            checked: false,
        }
    }
}
