/// Conversion of points between two coordinate frames.
///
/// Both directions return `None` if the result cannot be represented in the target frame.
pub trait Projection {
    /// Type of the points in the source frame.
    type InPoint;
    /// Type of the points in the target frame.
    type OutPoint;

    /// Converts a point from the source frame into the target frame.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts a point from the target frame back into the source frame.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Applies two projections one after another.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChainProjection<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> ChainProjection<First, Second> {
    /// Creates a projection that converts with `first` and then with `second`.
    pub fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }
}

impl<First, Second> Projection for ChainProjection<First, Second>
where
    First: Projection,
    Second: Projection<InPoint = First::OutPoint>,
{
    type InPoint = First::InPoint;
    type OutPoint = Second::OutPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.second.project(&self.first.project(input)?)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.first.unproject(&self.second.unproject(input)?)
    }
}

/// Projection with swapped source and target frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvertedProjection<P> {
    inner: P,
}

impl<P> InvertedProjection<P> {
    /// Creates the inverse of the given projection.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Projection> Projection for InvertedProjection<P> {
    type InPoint = P::OutPoint;
    type OutPoint = P::InPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.inner.unproject(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.inner.project(input)
    }
}
