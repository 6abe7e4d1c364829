//! Distance functions used by the neighborhood query.
//!
//! Both arguments are assumed to have the same length; [`Dataset`](super::Dataset)
//! enforces this once at construction, so implementations do not re-check it.

/// A dissimilarity between two points.
///
/// Implementations must be symmetric, non-negative, and zero for identical points.
/// Any `Fn(&[f32], &[f32]) -> f32` closure is a `Metric`.
pub trait Metric {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &[f32], b: &[f32]) -> f32;
}

/// Euclidean (L2) distance. The default metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| {
                let d = x - y;
                d * d
            })
            .sum::<f32>()
            .sqrt()
    }
}

/// Manhattan (L1) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Metric for Manhattan {
    #[inline]
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
    }
}

impl<F> Metric for F
where
    F: Fn(&[f32], &[f32]) -> f32,
{
    #[inline]
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_3_4_5() {
        assert_eq!(Euclidean.distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(Euclidean.distance(&[3.0, 4.0], &[0.0, 0.0]), 5.0);
        assert_eq!(Euclidean.distance(&[1.5, -2.0], &[1.5, -2.0]), 0.0);
    }

    #[test]
    fn manhattan_sums_axes() {
        assert_eq!(Manhattan.distance(&[0.0, 0.0], &[3.0, -4.0]), 7.0);
        assert_eq!(Manhattan.distance(&[2.0], &[2.0]), 0.0);
    }

    #[test]
    fn closure_is_a_metric() {
        let chebyshev = |a: &[f32], b: &[f32]| {
            a.iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).abs())
                .fold(0.0f32, f32::max)
        };
        assert_eq!(chebyshev.distance(&[0.0, 0.0], &[3.0, -4.0]), 4.0);
    }
}
