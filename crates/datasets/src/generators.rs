//! # Dataset Generators
//!
//! Six fixed decision boundaries over the unit square, plus a deterministic
//! two-arm spiral.
//!
//! | Dataset | Label 1 iff |
//! |---------|-------------|
//! | Simple | x1 < 0.5 |
//! | Diag | x1 + x2 < 0.5 |
//! | Split | x1 < 0.2 or x1 > 0.8 |
//! | Xor | exactly one of x1 < 0.5, x2 < 0.5 |
//! | Circle | (x1 - 0.5)² + (x2 - 0.5)² > 0.1 |
//! | Spiral | point lies on the second arm |
//!
//! The random generators draw from a caller-supplied [`Rng`], so seeding it
//! makes a dataset reproducible.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::graph::{Graph, Point};

/// `n` points drawn uniformly from `[0, 1)²`.
pub fn make_pts<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    (0..n).map(|_| (rng.gen::<f64>(), rng.gen::<f64>())).collect()
}

/// Label 1 left of `x1 = 0.5`.
pub fn simple<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    Graph::labelled_by(make_pts(n, rng), |x1, _| x1 < 0.5)
}

/// Label 1 below the anti-diagonal `x1 + x2 = 0.5`.
pub fn diag<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    Graph::labelled_by(make_pts(n, rng), |x1, x2| x1 + x2 < 0.5)
}

/// Label 1 in the two outer vertical bands.
pub fn split<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    Graph::labelled_by(make_pts(n, rng), |x1, _| x1 < 0.2 || x1 > 0.8)
}

/// Label 1 when exactly one coordinate is below 0.5.
///
/// A coordinate equal to 0.5 counts as "not below", so `(0.5, 0.25)` is
/// labelled 1 and `(0.5, 0.75)` is labelled 0.
pub fn xor<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    Graph::labelled_by(make_pts(n, rng), |x1, x2| (x1 < 0.5) != (x2 < 0.5))
}

/// Label 1 outside the circle of radius √0.1 centred on `(0.5, 0.5)`.
pub fn circle<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    Graph::labelled_by(make_pts(n, rng), |x1, x2| {
        let (dx, dy) = (x1 - 0.5, x2 - 0.5);
        dx * dx + dy * dy > 0.1
    })
}

/// Two interleaved spiral arms of `n / 2` points each.
///
/// The first arm is labelled 0, the second (mirrored, coordinates swapped)
/// is labelled 1. Coordinates are not confined to the unit square. An odd
/// `n` produces `n - 1` points.
pub fn spiral(n: usize) -> Graph {
    let half = n / 2;
    if n % 2 == 1 {
        log::warn!("spiral: odd size {} rounded down to {}", n, 2 * half);
    }

    let x = |t: f64| t * t.cos() / 20.0;
    let y = |t: f64| t * t.sin() / 20.0;
    let param = |i: usize| 10.0 * (i as f64 / half as f64);

    let first = (5..5 + half).map(|i| {
        let t = param(i);
        (x(t) + 0.5, y(t) + 0.5)
    });
    let second = (5..5 + half).map(|i| {
        let t = -param(i);
        (y(t) + 0.5, x(t) + 0.5)
    });

    let points: Vec<Point> = first.chain(second).collect();
    let mut labels = vec![0u8; half];
    labels.resize(2 * half, 1);

    Graph::from_parts_unchecked(points, labels)
}

/// The registered datasets, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    Simple,
    Diag,
    Split,
    Xor,
    Circle,
    Spiral,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Simple,
        DatasetKind::Diag,
        DatasetKind::Split,
        DatasetKind::Xor,
        DatasetKind::Circle,
        DatasetKind::Spiral,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Simple => "Simple",
            DatasetKind::Diag => "Diag",
            DatasetKind::Split => "Split",
            DatasetKind::Xor => "Xor",
            DatasetKind::Circle => "Circle",
            DatasetKind::Spiral => "Spiral",
        }
    }

    /// Whether the generator draws from the rng.
    pub fn is_random(&self) -> bool {
        !matches!(self, DatasetKind::Spiral)
    }

    /// Run this generator for `n` points.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Graph {
        let graph = match self {
            DatasetKind::Simple => simple(n, rng),
            DatasetKind::Diag => diag(n, rng),
            DatasetKind::Split => split(n, rng),
            DatasetKind::Xor => xor(n, rng),
            DatasetKind::Circle => circle(n, rng),
            DatasetKind::Spiral => spiral(n),
        };
        log::debug!(
            "generated {} dataset: {} points requested, {} produced, {} positive",
            self,
            n,
            graph.n(),
            graph.positives()
        );
        graph
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DatasetError::UnknownDataset { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_make_pts_in_unit_square() {
        let pts = make_pts(200, &mut rng());
        assert_eq!(pts.len(), 200);
        for &(x1, x2) in &pts {
            assert!((0.0..1.0).contains(&x1));
            assert!((0.0..1.0).contains(&x2));
        }
    }

    #[test]
    fn test_make_pts_empty() {
        assert!(make_pts(0, &mut rng()).is_empty());
    }

    #[test]
    fn test_simple_rule() {
        let g = simple(50, &mut rng());
        assert_eq!(g.n(), 50);
        assert_eq!(g.points().len(), 50);
        assert_eq!(g.labels().len(), 50);
        for ((x1, _), label) in g.iter() {
            assert_eq!(label, u8::from(x1 < 0.5));
        }
    }

    #[test]
    fn test_split_rule() {
        for ((x1, _), label) in split(100, &mut rng()).iter() {
            assert_eq!(label == 1, x1 < 0.2 || x1 > 0.8);
        }
    }

    #[test]
    fn test_xor_coordinate_on_boundary() {
        use rand::rngs::mock::StepRng;

        // next_u64 = 2^63 -> 0.5, 2^62 -> 0.25, 3 * 2^62 -> 0.75
        let mut below = StepRng::new(1 << 63, 0xC000_0000_0000_0000);
        let g = xor(1, &mut below);
        assert_eq!(g.points()[0], (0.5, 0.25));
        assert_eq!(g.labels()[0], 1);

        let mut above = StepRng::new(1 << 63, 1 << 62);
        let g = xor(1, &mut above);
        assert_eq!(g.points()[0], (0.5, 0.75));
        assert_eq!(g.labels()[0], 0);
    }

    #[test]
    fn test_spiral_labels() {
        let g = spiral(20);
        assert_eq!(g.n(), 20);
        assert!(g.labels()[..10].iter().all(|&l| l == 0));
        assert!(g.labels()[10..].iter().all(|&l| l == 1));
    }

    #[test]
    fn test_spiral_first_point() {
        // i = 5, half = 10 -> t = 5
        let g = spiral(20);
        let (x1, x2) = g.points()[0];
        assert!((x1 - (5.0 * 5.0_f64.cos() / 20.0 + 0.5)).abs() < 1e-12);
        assert!((x2 - (5.0 * 5.0_f64.sin() / 20.0 + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_spiral_odd_and_tiny() {
        let g = spiral(21);
        assert_eq!(g.n(), 20);
        assert_eq!(g.points().len(), 20);
        assert!(spiral(1).is_empty());
        assert!(spiral(0).is_empty());
    }

    #[test]
    fn test_kind_names_roundtrip() {
        for kind in DatasetKind::ALL {
            assert_eq!(kind.name().parse::<DatasetKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_kind_unknown_name() {
        let err = "Moons".parse::<DatasetKind>().unwrap_err();
        assert_eq!(
            err,
            DatasetError::UnknownDataset {
                name: "Moons".to_string()
            }
        );
        // Names are case sensitive.
        assert!("simple".parse::<DatasetKind>().is_err());
    }

    #[test]
    fn test_kind_generate_dispatch() {
        let g = DatasetKind::Diag.generate(30, &mut rng());
        assert_eq!(g.n(), 30);
        for ((x1, x2), label) in g.iter() {
            assert_eq!(label == 1, x1 + x2 < 0.5);
        }
        assert!(!DatasetKind::Spiral.is_random());
        assert!(DatasetKind::Circle.is_random());
    }
}
