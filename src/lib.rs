//! Boolean operations on simple polygons by the Greiner-Hormann clipping algorithm.
//!
//! Both operands must be simple polygons: closed, non self-intersecting, and given without
//! repeating the first vertex at the end. Any other input is out of contract and yields an
//! undefined output. Crossings at an endpoint of either edge, as well as overlapping edges,
//! are not considered intersections. Besides, the first vertex of each polygon must not lie
//! exactly on the boundary of the other one: it is classified as inside or outside the other
//! polygon to select the output, which may come out inverted otherwise.
//!
//! Holes cannot be represented: whenever the result would be a polygon with a hole, only its
//! outer boundary is returned.
//!
//! ```
//! use hormann::{Operation, clip_polygon};
//!
//! let subject = [[0., 0.], [10., 0.], [10., 10.], [0., 10.]];
//! let clip = [[5., 5.], [15., 5.], [15., 15.], [5., 15.]];
//!
//! let output = clip_polygon(subject, clip, Operation::Intersection);
//! assert_eq!(output, vec![vec![[10., 5.], [10., 10.], [5., 10.], [5., 5.]]]);
//! ```

mod clipper;
mod determinant;
mod error;
mod graph;
mod operation;
mod point;
mod polygon;
mod segment;
mod vertex;

pub use self::error::Error;
pub use self::operation::Operation;
pub use self::point::Point;
pub use self::polygon::Polygon;
pub use self::segment::{Crossing, Segment};

use std::fmt::Debug;

use num_traits::Float;

/// Performs the given operation on the subject and clip polygons, both described by their
/// ordered vertices, and returns the vertices of every resulting polygon.
///
/// See [`Polygon`] for the preconditions on both operands.
pub fn clip_polygon<T, S, C>(subject: S, clip: C, operation: Operation) -> Vec<Vec<[T; 2]>>
where
    T: Float + Debug,
    S: IntoIterator,
    S::Item: Into<Point<T>>,
    C: IntoIterator,
    C::Item: Into<Point<T>>,
{
    let subject: Polygon<T> = subject.into_iter().collect();
    let clip: Polygon<T> = clip.into_iter().collect();

    subject
        .clip(clip, operation)
        .into_iter()
        .map(|polygon| polygon.into_iter().map(Into::into).collect())
        .collect()
}
