use std::fmt::Debug;

use num_traits::Float;

use crate::{
    Operation, Point,
    clipper::{Clipper, Direction, Operator},
    graph::{Boundary, Graph},
    vertex::Vertex,
};

/// A simple polygon in the plain.
///
/// The boundary is implicitly closed: the last vertex connects back to the first one, which is
/// never repeated. Boolean operations expect both operands to be simple, non self-intersecting,
/// polygons; any other input yields an undefined, although always finite, output.
///
/// The first vertex of each operand is classified as inside or outside the other one to decide
/// which parts of the boundaries make the output. Hence, the first vertex of an operand must not
/// lie exactly on the boundary of the other, or the output may be inverted.
#[derive(Debug, Clone)]
pub struct Polygon<T = f64> {
    /// The ordered list of vertices describing the polygon.
    pub vertices: Vec<Point<T>>,
}

impl<T, P> From<Vec<P>> for Polygon<T>
where
    P: Into<Point<T>>,
{
    fn from(vertices: Vec<P>) -> Self {
        vertices.into_iter().collect()
    }
}

impl<T, P> FromIterator<P> for Polygon<T>
where
    P: Into<Point<T>>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T> PartialEq for Polygon<T>
where
    T: Clone + PartialEq,
{
    /// Two polygons are equal if, and only if, they have the same vertices describing the same
    /// boundary, no matter the vertex it starts at nor the direction it is traversed.
    fn eq(&self, other: &Self) -> bool {
        let len = self.vertices.len();
        if len != other.vertices.len() {
            return false;
        }

        if len == 0 {
            return true;
        }

        let mut double = other.vertices.clone();
        double.extend_from_slice(&other.vertices);

        let is_rotation = |double: &[Point<T>]| {
            (0..len).any(|padding| double[padding..padding + len] == self.vertices[..])
        };

        if is_rotation(&double) {
            return true;
        }

        double.reverse();
        is_rotation(&double)
    }
}

impl<T> IntoIterator for Polygon<T> {
    type Item = Point<T>;
    type IntoIter = std::vec::IntoIter<Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<T> Polygon<T> {
    /// Returns an ordered iterator over all the vertices of the polygon.
    pub fn vertices(&self) -> impl Iterator<Item = &Point<T>> {
        self.vertices.iter()
    }
}

impl<T> Polygon<T>
where
    T: Float + Debug,
{
    /// Returns true if, and only if, the given point is inside this polygon by the odd-even
    /// rule.
    ///
    /// Points lying exactly on the boundary of the polygon are not reliably classified.
    pub fn contains(&self, point: &Point<T>) -> bool {
        let mut graph = Graph::default();
        let mut boundary = Boundary::default();
        self.vertices.iter().for_each(|&vertex| {
            graph.add(&mut boundary, Vertex::new(vertex));
        });

        graph.is_inside(point, boundary)
    }

    /// Returns the union of self and rhs.
    ///
    /// See [`Polygon`] for the preconditions on both operands.
    pub fn union(self, rhs: impl Into<Self>) -> Vec<Self> {
        struct UnionOperator;

        impl Operator for UnionOperator {
            const SUBJECT: Direction = Direction::Backward;
            const CLIP: Direction = Direction::Backward;
        }

        Clipper::default()
            .with_operator::<UnionOperator>()
            .with_subject(self)
            .with_clip(rhs)
            .execute()
    }

    /// Returns the intersection of self and rhs.
    ///
    /// See [`Polygon`] for the preconditions on both operands.
    pub fn intersection(self, rhs: impl Into<Self>) -> Vec<Self> {
        struct IntersectionOperator;

        impl Operator for IntersectionOperator {
            const SUBJECT: Direction = Direction::Forward;
            const CLIP: Direction = Direction::Forward;
        }

        Clipper::default()
            .with_operator::<IntersectionOperator>()
            .with_subject(self)
            .with_clip(rhs)
            .execute()
    }

    /// Returns the difference of rhs on self.
    ///
    /// See [`Polygon`] for the preconditions on both operands.
    pub fn difference(self, rhs: impl Into<Self>) -> Vec<Self> {
        struct DifferenceOperator;

        impl Operator for DifferenceOperator {
            const SUBJECT: Direction = Direction::Backward;
            const CLIP: Direction = Direction::Forward;
        }

        Clipper::default()
            .with_operator::<DifferenceOperator>()
            .with_subject(self)
            .with_clip(rhs)
            .execute()
    }

    /// Returns the difference of self on rhs.
    ///
    /// See [`Polygon`] for the preconditions on both operands.
    pub fn reversed_difference(self, rhs: impl Into<Self>) -> Vec<Self> {
        struct ReversedDifferenceOperator;

        impl Operator for ReversedDifferenceOperator {
            const SUBJECT: Direction = Direction::Forward;
            const CLIP: Direction = Direction::Backward;
        }

        Clipper::default()
            .with_operator::<ReversedDifferenceOperator>()
            .with_subject(self)
            .with_clip(rhs)
            .execute()
    }

    /// Returns the result of the given operation having self as subject and rhs as clip.
    pub fn clip(self, rhs: impl Into<Self>, operation: Operation) -> Vec<Self> {
        match operation {
            Operation::Union => self.union(rhs),
            Operation::Intersection => self.intersection(rhs),
            Operation::Difference => self.difference(rhs),
            Operation::ReversedDifference => self.reversed_difference(rhs),
        }
    }
}
