mod trace;

use std::{fmt::Debug, marker::PhantomData};

use log::debug;
use num_traits::Float;

use self::trace::Trace;

use crate::{
    Polygon,
    graph::{Boundary, Graph, Unknown},
    vertex::Vertex,
};

/// A direction to follow when traversing a boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Use the `next` field of the [`Vertex`].
    #[default]
    Forward,
    /// Use the `previous` field of the [`Vertex`].
    Backward,
}

impl From<bool> for Direction {
    fn from(entry: bool) -> Self {
        if entry {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

impl Direction {
    /// Returns the position of the vertex following the given one.
    fn next<T>(&self, vertex: &Vertex<T>) -> usize {
        match self {
            Direction::Forward => vertex.next,
            Direction::Backward => vertex.previous,
        }
    }

    fn is_forward(&self) -> bool {
        matches!(self, Self::Forward)
    }
}

/// The operation to perform by the clipping algorithm.
///
/// Both directions tell how to leave the first intersection of the corresponding boundary when
/// its first vertex lies outside the other one.
pub(crate) trait Operator {
    /// The direction to take from the first intersection of the subject.
    const SUBJECT: Direction;
    /// The direction to take from the first intersection of the clip.
    const CLIP: Direction;
}

/// Implements the clipping algorithm.
pub(crate) struct Clipper<Subject, Clip, Operator> {
    subject: Subject,
    clip: Clip,
    operator: PhantomData<Operator>,
}

impl Default for Clipper<Unknown, Unknown, Unknown> {
    fn default() -> Self {
        Self {
            operator: PhantomData,
            subject: Unknown,
            clip: Unknown,
        }
    }
}

impl<Sub, Clip, Op> Clipper<Sub, Clip, Op> {
    pub(crate) fn with_operator<Operator>(self) -> Clipper<Sub, Clip, Operator> {
        Clipper {
            operator: PhantomData,
            subject: self.subject,
            clip: self.clip,
        }
    }
}

impl<Clip, Op> Clipper<Unknown, Clip, Op> {
    pub(crate) fn with_subject<U>(
        self,
        subject: impl Into<Polygon<U>>,
    ) -> Clipper<Polygon<U>, Clip, Op> {
        Clipper {
            operator: PhantomData,
            subject: subject.into(),
            clip: self.clip,
        }
    }
}

impl<Sub, Op> Clipper<Sub, Unknown, Op> {
    pub(crate) fn with_clip<U>(self, clip: impl Into<Polygon<U>>) -> Clipper<Sub, Polygon<U>, Op> {
        Clipper {
            operator: PhantomData,
            subject: self.subject,
            clip: clip.into(),
        }
    }
}

impl<T, Op> Clipper<Polygon<T>, Polygon<T>, Op>
where
    T: Float + Debug,
    Op: Operator,
{
    /// Performs the clipping operation and returns the resulting polygons.
    pub(crate) fn execute(self) -> Vec<Polygon<T>> {
        let mut graph = Graph::builder()
            .with_subject(&self.subject)
            .with_clip(&self.clip)
            .build();

        let (subject, clip) = (graph.subject, graph.clip);

        let crossings = graph.intersections(subject);
        debug!("found {crossings} crossings between subject and clip");

        let subject_inside = Self::is_inside(&graph, subject, clip);
        let clip_inside = Self::is_inside(&graph, clip, subject);

        if crossings == 0 {
            return self.without_crossings(subject_inside, clip_inside);
        }

        Self::classify(&mut graph, subject, Op::SUBJECT.is_forward() ^ subject_inside);
        Self::classify(&mut graph, clip, Op::CLIP.is_forward() ^ clip_inside);

        let mut output = Vec::new();
        while let Some(start) = graph.first_unprocessed_intersection(subject) {
            let polygon: Polygon<T> = Trace::new(&mut graph, start).collect();
            debug!("traced a polygon of {} vertices", polygon.vertices.len());

            output.push(polygon);
        }

        output
    }

    /// Returns true if, and only if, the first vertex of the given boundary is inside the other.
    fn is_inside(graph: &Graph<T>, boundary: Boundary, other: Boundary) -> bool {
        boundary
            .first
            .is_some_and(|first| graph.is_inside(&graph.vertices[first].point, other))
    }

    /// Flags the intersections in the given boundary as entry or exit, alternately, starting
    /// from the given value.
    fn classify(graph: &mut Graph<T>, boundary: Boundary, mut entry: bool) {
        debug!("classifying intersections starting with entry = {entry}");

        for position in graph.iter(boundary) {
            let vertex = &mut graph.vertices[position];
            if vertex.intersect {
                vertex.entry = entry;
                entry = !entry;
            }
        }
    }

    /// Returns the output of an operation whose operands do not cross each other.
    ///
    /// Each boundary is either fully inside or fully outside the other, so it is kept as is or
    /// discarded as a whole. Holes cannot be represented, so a kept boundary enclosed by the
    /// other kept one is discarded.
    fn without_crossings(self, subject_inside: bool, clip_inside: bool) -> Vec<Polygon<T>> {
        let keep_subject = Op::SUBJECT.is_forward() == subject_inside;
        let keep_clip = Op::CLIP.is_forward() == clip_inside;

        let (keep_subject, keep_clip) = match (keep_subject, keep_clip) {
            (true, true) if clip_inside => (true, false),
            (true, true) if subject_inside => (false, true),
            other => other,
        };

        debug!(
            "no crossings: subject inside = {subject_inside}, clip inside = {clip_inside}, \
             keeping subject = {keep_subject}, keeping clip = {keep_clip}"
        );

        [(keep_subject, self.subject), (keep_clip, self.clip)]
            .into_iter()
            .filter(|(keep, polygon)| *keep && !polygon.vertices.is_empty())
            .map(|(_, polygon)| polygon)
            .collect()
    }
}
