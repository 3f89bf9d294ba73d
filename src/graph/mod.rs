mod builder;

pub(crate) use self::builder::{GraphBuilder, Unknown};

use num_traits::Float;

use crate::{Point, vertex::Vertex};

/// A circular sequence of vertices in the [`Graph`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Boundary {
    /// The position in the graph of the vertex the sequence starts at, if any.
    pub(crate) first: Option<usize>,
}

/// The arena holding the vertices of both the subject and clip boundaries.
#[derive(Debug)]
pub(crate) struct Graph<T> {
    /// The vertices in the graph.
    pub(crate) vertices: Vec<Vertex<T>>,
    /// The boundary being clipped.
    pub(crate) subject: Boundary,
    /// The boundary clipping the subject.
    pub(crate) clip: Boundary,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            vertices: Default::default(),
            subject: Default::default(),
            clip: Default::default(),
        }
    }
}

impl<T> Graph<T> {
    /// Returns the builder for a new graph.
    pub(crate) fn builder() -> GraphBuilder<T, Unknown, Unknown> {
        GraphBuilder {
            graph: Graph::default(),
            subject: Unknown,
            clip: Unknown,
        }
    }

    /// Appends the given vertex at the end of the boundary, right before its first vertex, and
    /// returns its position in the graph.
    pub(crate) fn add(&mut self, boundary: &mut Boundary, mut vertex: Vertex<T>) -> usize {
        let position = self.vertices.len();

        match boundary.first {
            None => {
                vertex.next = position;
                vertex.previous = position;
                boundary.first = Some(position);
            }
            Some(first) => {
                let last = self.vertices[first].previous;
                vertex.next = first;
                vertex.previous = last;
                self.vertices[last].next = position;
                self.vertices[first].previous = position;
            }
        }

        self.vertices.push(vertex);
        position
    }

    /// Returns the position of the first original vertex found from the given one onwards,
    /// including itself.
    pub(crate) fn next_original(&self, mut position: usize) -> usize {
        while self.vertices[position].intersect {
            position = self.vertices[position].next;
        }

        position
    }

    /// Returns the positions of all the vertices in the boundary, in order.
    ///
    /// The positions are collected beforehand so the graph can be mutated while iterating them.
    pub(crate) fn iter(&self, boundary: Boundary) -> Vec<usize> {
        let Some(first) = boundary.first else {
            return Vec::new();
        };

        let mut positions = vec![first];
        let mut current = self.vertices[first].next;
        while current != first {
            positions.push(current);
            current = self.vertices[current].next;
        }

        positions
    }

    /// Returns the points of all the vertices in the boundary, in order.
    #[cfg(test)]
    pub(crate) fn points(&self, boundary: Boundary) -> Vec<Point<T>>
    where
        T: Copy,
    {
        self.iter(boundary)
            .into_iter()
            .map(|position| self.vertices[position].point)
            .collect()
    }

    /// Returns the amount of intersection vertices in the boundary.
    pub(crate) fn intersections(&self, boundary: Boundary) -> usize {
        self.iter(boundary)
            .into_iter()
            .filter(|&position| self.vertices[position].intersect)
            .count()
    }

    /// Returns true if, and only if, any intersection in the boundary has not been checked yet.
    #[cfg(test)]
    pub(crate) fn unprocessed(&self, boundary: Boundary) -> bool {
        self.first_unprocessed_intersection(boundary).is_some()
    }

    /// Returns the position of the first intersection in the boundary that has not been checked
    /// yet, if any.
    pub(crate) fn first_unprocessed_intersection(&self, boundary: Boundary) -> Option<usize> {
        self.iter(boundary).into_iter().find(|&position| {
            let vertex = &self.vertices[position];
            vertex.intersect && !vertex.checked
        })
    }

    /// Marks the vertex at the given position, and its neighbour if any, as checked.
    pub(crate) fn set_checked(&mut self, position: usize) {
        self.vertices[position].checked = true;
        if let Some(neighbour) = self.vertices[position].neighbour {
            self.vertices[neighbour].checked = true;
        }
    }
}

impl<T> Graph<T>
where
    T: PartialOrd,
{
    /// Inserts the given intersection vertex between start and end, both being the original
    /// vertices delimiting the edge it subdivides, and returns its position in the graph.
    ///
    /// Intersections within the same edge are kept sorted by their alpha.
    pub(crate) fn insert(&mut self, mut vertex: Vertex<T>, start: usize, end: usize) -> usize {
        let mut current = start;
        while current != end && self.vertices[current].alpha < vertex.alpha {
            current = self.vertices[current].next;
        }

        let position = self.vertices.len();
        let previous = self.vertices[current].previous;

        vertex.next = current;
        vertex.previous = previous;
        self.vertices[previous].next = position;
        self.vertices[current].previous = position;

        self.vertices.push(vertex);
        position
    }
}

impl<T> Graph<T>
where
    T: Float,
{
    /// Returns true if, and only if, the given point is inside the boundary by the odd-even rule.
    ///
    /// Counts how many original edges of the boundary cross the horizontal ray going from the
    /// point to the right. An edge counts only if one of its endpoints lies strictly above the
    /// ray and the other does not, hence a ray passing through a vertex counts it once if the
    /// boundary crosses the ray there, and never if it only touches it. Points lying exactly on
    /// an edge are not reliably classified.
    pub(crate) fn is_inside(&self, point: &Point<T>, boundary: Boundary) -> bool {
        let crossings = self
            .iter(boundary)
            .into_iter()
            .filter(|&position| !self.vertices[position].intersect)
            .filter(|&position| {
                let from = &self.vertices[position].point;
                let to = &self.vertices[self.next_original(self.vertices[position].next)].point;

                if (from.y > point.y) == (to.y > point.y) {
                    return false;
                }

                let x = from.x + (point.y - from.y) * (to.x - from.x) / (to.y - from.y);
                point.x < x
            })
            .count();

        crossings % 2 != 0
    }
}
