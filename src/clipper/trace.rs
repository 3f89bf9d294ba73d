use log::warn;

use crate::{Point, graph::Graph};

use super::Direction;

/// Yields the points of the output boundary starting at the given intersection, hopping from
/// one boundary to the other at every intersection found on the way.
pub(super) struct Trace<'a, T> {
    pub(super) graph: &'a mut Graph<T>,
    /// The position in the graph of the last vertex yielded.
    pub(super) current: usize,
    /// The direction being followed since the last intersection.
    pub(super) direction: Direction,
    /// If false, the starting intersection has not been yielded yet.
    pub(super) started: bool,
    /// If true, the boundary is closed and no more points are yielded.
    pub(super) finished: bool,
    /// The amount of steps left before giving up on closing the boundary.
    pub(super) steps: usize,
}

impl<'a, T> Trace<'a, T> {
    /// Returns the trace starting at the intersection in the given position, leaving it in the
    /// direction told by its entry flag.
    pub(super) fn new(graph: &'a mut Graph<T>, start: usize) -> Self {
        let direction = graph.vertices[start].entry.into();
        let steps = graph.vertices.len() + 1;

        Self {
            graph,
            current: start,
            direction,
            started: false,
            finished: false,
            steps,
        }
    }
}

impl<T> Iterator for Trace<'_, T>
where
    T: Copy,
{
    type Item = Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.started {
            self.started = true;
            self.graph.set_checked(self.current);
            return Some(self.graph.vertices[self.current].point);
        }

        if self.steps == 0 {
            warn!("boundary starting at vertex {} could not be closed", self.current);
            self.finished = true;
            return None;
        }

        self.steps -= 1;

        let position = self.direction.next(&self.graph.vertices[self.current]);
        let vertex = &self.graph.vertices[position];
        let point = vertex.point;

        if !vertex.intersect {
            self.current = position;
            return Some(point);
        }

        // Reaching an already checked intersection means the boundary is closed.
        let (false, Some(neighbour)) = (vertex.checked, vertex.neighbour) else {
            self.finished = true;
            return None;
        };

        self.graph.set_checked(position);
        self.current = neighbour;
        self.direction = self.graph.vertices[neighbour].entry.into();

        Some(point)
    }
}
