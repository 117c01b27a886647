use std::fmt;
use std::ops::Index;

/// Ordered, immutable sequence of per-dimension values.
///
/// One `Dims` describes either the extent of each dimension of a logical
/// shape or the element stride to advance one index along each dimension.
/// Dimension 0 is the outermost. Extents and strides passed to one copy
/// call must have equal rank, but need not be the same instance.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Dims(Box<[usize]>);

impl Dims {
    pub fn new(dims: &[usize]) -> Self {
        Self(dims.into())
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Product of all values. For an extent descriptor this is the number
    /// of elements in the described region.
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }
}

impl Index<usize> for Dims {
    type Output = usize;

    fn index(&self, dim: usize) -> &usize {
        &self.0[dim]
    }
}

impl From<Vec<usize>> for Dims {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims.into())
    }
}

impl From<&[usize]> for Dims {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims)
    }
}

impl<const R: usize> From<[usize; R]> for Dims {
    fn from(dims: [usize; R]) -> Self {
        Self::new(&dims)
    }
}

impl fmt::Debug for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dims({:?})", &self.0)
    }
}

/// Compute default (contiguous, row-major) strides for a given extent.
pub fn contiguous_strides(extent: &Dims) -> Dims {
    let mut strides = Vec::with_capacity(extent.rank());
    let mut acc = 1;
    // Iterate dims in reverse to accumulate products
    for dim in extent.iter().rev() {
        strides.push(acc);
        acc *= *dim;
    }
    strides.reverse();
    Dims::from(strides)
}
