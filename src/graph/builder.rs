use std::fmt::Debug;

use log::trace;
use num_traits::Float;

use crate::{
    Polygon, Segment,
    graph::{Boundary, Graph},
    vertex::Vertex,
};

/// Marker for yet undefined generic parameters.
pub(crate) struct Unknown;

/// Loads the subject and clip polygons into a [`Graph`] and links both boundaries at every
/// crossing between them.
pub(crate) struct GraphBuilder<T, S, C> {
    /// The graph being built.
    pub(super) graph: Graph<T>,
    /// The boundary of the shape being clipped.
    pub(super) subject: S,
    /// The boundary of the shape clipping the subject.
    pub(super) clip: C,
}

impl<T, C> GraphBuilder<T, Unknown, C>
where
    T: Float,
{
    /// Sets the subject [`Polygon`] into the graph.
    pub(crate) fn with_subject(mut self, subject: &Polygon<T>) -> GraphBuilder<T, Boundary, C> {
        let subject = self.with_polygon(subject);

        GraphBuilder {
            graph: self.graph,
            subject,
            clip: self.clip,
        }
    }
}

impl<T, S> GraphBuilder<T, S, Unknown>
where
    T: Float,
{
    /// Sets the clip [`Polygon`] into the graph.
    pub(crate) fn with_clip(mut self, clip: &Polygon<T>) -> GraphBuilder<T, S, Boundary> {
        let clip = self.with_polygon(clip);

        GraphBuilder {
            graph: self.graph,
            subject: self.subject,
            clip,
        }
    }
}

impl<T, S, C> GraphBuilder<T, S, C>
where
    T: Float,
{
    fn with_polygon(&mut self, polygon: &Polygon<T>) -> Boundary {
        self.graph.vertices.reserve(polygon.vertices.len());

        let mut boundary = Boundary::default();
        polygon.vertices.iter().for_each(|&point| {
            self.graph.add(&mut boundary, Vertex::new(point));
        });

        boundary
    }
}

impl<T> GraphBuilder<T, Boundary, Boundary>
where
    T: Float + Debug,
{
    /// Returns the graph having an intersection vertex inserted in both boundaries at every
    /// crossing between their edges.
    pub(crate) fn build(mut self) -> Graph<T> {
        self.graph.subject = self.subject;
        self.graph.clip = self.clip;

        for subject in self.graph.iter(self.subject) {
            if self.graph.vertices[subject].intersect {
                continue;
            }

            // The clip boundary grows with every crossing, hence it is collected once per edge.
            for clip in self.graph.iter(self.clip) {
                if self.graph.vertices[clip].intersect {
                    continue;
                }

                let subject_end = self.graph.next_original(self.graph.vertices[subject].next);
                let clip_end = self.graph.next_original(self.graph.vertices[clip].next);

                let vertices = &self.graph.vertices;
                let Some(crossing) = Segment::new(&vertices[subject].point, &vertices[subject_end].point)
                    .intersection(&Segment::new(&vertices[clip].point, &vertices[clip_end].point))
                else {
                    continue;
                };

                trace!(
                    "crossing at {:?} between subject edge {subject} and clip edge {clip}",
                    crossing.point
                );

                let subject_intersection = self.graph.insert(
                    Vertex::intersection(crossing.point, crossing.subject),
                    subject,
                    subject_end,
                );

                let clip_intersection = self.graph.insert(
                    Vertex::intersection(crossing.point, crossing.clip),
                    clip,
                    clip_end,
                );

                self.graph.vertices[subject_intersection].neighbour = Some(clip_intersection);
                self.graph.vertices[clip_intersection].neighbour = Some(subject_intersection);
            }
        }

        self.graph
    }
}

#[cfg(test)]
mod tests {
    use crate::{Polygon, graph::Graph, point};

    #[test]
    fn build_without_crossings() {
        let subject = Polygon::from(vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]]);
        let clip = Polygon::from(vec![[6., 6.], [10., 6.], [10., 10.], [6., 10.]]);

        let graph = Graph::builder()
            .with_subject(&subject)
            .with_clip(&clip)
            .build();

        assert_eq!(graph.vertices.len(), 8);
        assert_eq!(graph.intersections(graph.subject), 0);
        assert_eq!(graph.intersections(graph.clip), 0);
        assert_eq!(graph.points(graph.subject), subject.vertices);
        assert_eq!(graph.points(graph.clip), clip.vertices);
    }

    #[test]
    fn build_with_overlapping_corners() {
        let subject = Polygon::from(vec![[0., 0.], [10., 0.], [10., 10.], [0., 10.]]);
        let clip = Polygon::from(vec![[5., 5.], [15., 5.], [15., 15.], [5., 15.]]);

        let graph = Graph::builder()
            .with_subject(&subject)
            .with_clip(&clip)
            .build();

        assert_eq!(
            graph.points(graph.subject),
            vec![
                point!(0., 0.),
                point!(10., 0.),
                point!(10., 5.),
                point!(10., 10.),
                point!(5., 10.),
                point!(0., 10.),
            ]
        );

        assert_eq!(
            graph.points(graph.clip),
            vec![
                point!(5., 5.),
                point!(10., 5.),
                point!(15., 5.),
                point!(15., 15.),
                point!(5., 15.),
                point!(5., 10.),
            ]
        );

        graph
            .iter(graph.subject)
            .into_iter()
            .chain(graph.iter(graph.clip))
            .for_each(|position| {
                let vertex = &graph.vertices[position];
                match vertex.neighbour {
                    Some(neighbour) => {
                        assert!(vertex.intersect);
                        assert_eq!(graph.vertices[neighbour].neighbour, Some(position));
                        assert_eq!(graph.vertices[neighbour].point, vertex.point);
                    }
                    None => assert!(!vertex.intersect),
                }
            });
    }

    #[test]
    fn build_with_many_crossings_on_the_same_edge() {
        let subject = Polygon::from(vec![[0., 0.], [8., 0.], [8., 8.], [0., 8.]]);
        let clip = Polygon::from(vec![[1., -2.], [3., 2.], [5., -2.], [7., 2.], [7., -4.], [1., -4.]]);

        let graph = Graph::builder()
            .with_subject(&subject)
            .with_clip(&clip)
            .build();

        assert_eq!(graph.intersections(graph.subject), 4);
        assert_eq!(graph.intersections(graph.clip), 4);
        assert_eq!(
            graph.points(graph.subject)[..6],
            [
                point!(0., 0.),
                point!(2., 0.),
                point!(4., 0.),
                point!(6., 0.),
                point!(7., 0.),
                point!(8., 0.),
            ]
        );

        let alphas: Vec<f64> = graph
            .iter(graph.subject)
            .into_iter()
            .filter(|&position| graph.vertices[position].intersect)
            .map(|position| graph.vertices[position].alpha)
            .collect();

        assert_eq!(alphas, vec![0.25, 0.5, 0.75, 0.875]);
    }
}
