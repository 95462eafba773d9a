//! # Labelled Point Sets
//!
//! A [`Graph`] is a binary-classification dataset: `n` points in the plane
//! and one 0/1 label per point. ("Graph" as in "something you plot", not a
//! graph of nodes and edges.)
//!
//! The three parts always agree in length. Fields are private so the only
//! ways in are [`Graph::new`] and deserialization, and both check this.

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// A point in the plane, `(x1, x2)`.
pub type Point = (f64, f64);

/// An immutable labelled 2-D point set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGraph")]
pub struct Graph {
    n: usize,
    points: Vec<Point>,
    labels: Vec<u8>,
}

/// Unchecked wire form of [`Graph`].
#[derive(Deserialize)]
struct RawGraph {
    n: usize,
    points: Vec<Point>,
    labels: Vec<u8>,
}

impl TryFrom<RawGraph> for Graph {
    type Error = DatasetError;

    fn try_from(raw: RawGraph) -> Result<Self, Self::Error> {
        let graph = Graph::new(raw.points, raw.labels)?;
        if graph.n != raw.n {
            return Err(DatasetError::CountMismatch {
                declared: raw.n,
                actual: graph.n,
            });
        }
        Ok(graph)
    }
}

impl Graph {
    /// Build a dataset from parallel point and label lists.
    ///
    /// Fails if the lists differ in length or a label is not 0 or 1.
    pub fn new(points: Vec<Point>, labels: Vec<u8>) -> Result<Self, DatasetError> {
        if points.len() != labels.len() {
            return Err(DatasetError::LengthMismatch {
                points: points.len(),
                labels: labels.len(),
            });
        }
        if let Some(index) = labels.iter().position(|&l| l > 1) {
            return Err(DatasetError::InvalidLabel {
                index,
                label: labels[index],
            });
        }
        Ok(Self {
            n: points.len(),
            points,
            labels,
        })
    }

    /// Label points with a decision rule.
    pub(crate) fn labelled_by(points: Vec<Point>, rule: impl Fn(f64, f64) -> bool) -> Self {
        let labels = points
            .iter()
            .map(|&(x1, x2)| u8::from(rule(x1, x2)))
            .collect();
        Self {
            n: points.len(),
            points,
            labels,
        }
    }

    pub(crate) fn from_parts_unchecked(points: Vec<Point>, labels: Vec<u8>) -> Self {
        debug_assert_eq!(points.len(), labels.len());
        Self {
            n: points.len(),
            points,
            labels,
        }
    }

    /// Number of points.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Iterate `(point, label)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.points.iter().copied().zip(self.labels.iter().copied())
    }

    /// Number of points labelled 1.
    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l == 1).count()
    }

    /// Split into the owned point and label lists.
    pub fn into_parts(self) -> (Vec<Point>, Vec<u8>) {
        (self.points, self.labels)
    }
}
