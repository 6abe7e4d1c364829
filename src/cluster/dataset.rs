use crate::error::{Error, Result};

/// An ordered, validated set of points sharing one dimensionality.
///
/// The position of a point is its identity for the whole run: points are never
/// reordered, and every label array produced from a `Dataset` is parallel to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<Vec<f32>>,
    dim: usize,
}

impl Dataset {
    /// Validate and wrap `points`.
    ///
    /// Fails if there are no points, if the first point has no coordinates,
    /// if any point's length differs from the first, or if any coordinate is
    /// NaN or infinite.
    pub fn new(points: Vec<Vec<f32>>) -> Result<Self> {
        let first = points.first().ok_or(Error::EmptyInput)?;
        let dim = first.len();
        if dim == 0 {
            return Err(Error::InvalidParameter {
                name: "dimension",
                message: "must be at least 1",
            });
        }

        for (index, p) in points.iter().enumerate() {
            if p.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: p.len(),
                });
            }
            if p.iter().any(|x| !x.is_finite()) {
                return Err(Error::NonFinite { index });
            }
        }

        Ok(Self { points, dim })
    }

    /// Same as [`Dataset::new`], copying from a borrowed slice.
    pub fn from_slice(points: &[Vec<f32>]) -> Result<Self> {
        Self::new(points.to_vec())
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dimensionality shared by every point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The point at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    pub fn point(&self, idx: usize) -> &[f32] {
        &self.points[idx]
    }

    /// Iterate over points in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[f32]> {
        self.points.iter().map(Vec::as_slice)
    }

    /// Release the underlying points.
    pub fn into_inner(self) -> Vec<Vec<f32>> {
        self.points
    }
}
