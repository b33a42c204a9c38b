use objgen_common::ArrayIndex;

/// Pool indices of one corner of a [Face].
///
/// Indices are 0-based positions within the owning [Mesh](crate::Mesh)'s pools. Channels the
/// mesh doesn't record are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceVertex<Idx: ArrayIndex = u32> {
    pub(crate) position: Idx,
    pub(crate) texcoord: Option<Idx>,
    pub(crate) normal: Option<Idx>,
}

impl<Idx: ArrayIndex> FaceVertex<Idx> {
    /// Index into the position pool.
    #[inline]
    pub fn position(&self) -> Idx {
        self.position
    }

    /// Index into the texcoord pool, if texcoords are recorded.
    #[inline]
    pub fn texcoord(&self) -> Option<Idx> {
        self.texcoord
    }

    /// Index into the normal pool, if normals are recorded.
    #[inline]
    pub fn normal(&self) -> Option<Idx> {
        self.normal
    }
}

/// A triangular face; corners are kept in the order they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face<Idx: ArrayIndex = u32>(pub(crate) [FaceVertex<Idx>; 3]);

impl<Idx: ArrayIndex> Face<Idx> {
    /// Corners in winding order.
    #[inline]
    pub fn vertices(&self) -> &[FaceVertex<Idx>; 3] {
        &self.0
    }
}
