use crate::{Error, Result, Vector2, Vector3};

/// A single triangle: three positions, optionally three texcoords, and one flat-shaded normal.
///
/// The normal is `cross(p1 - p0, p2 - p0)`, computed once at construction and left
/// unnormalized. Winding order is kept exactly as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    positions: [Vector3; 3],
    texcoords: Option<[Vector2; 3]>,
    normal: Vector3,
}

impl Triangle {
    /// Construct a triangle from its positions and (0 or 3) texcoords.
    ///
    /// # Errors
    ///
    /// * [Error::PositionCount] if `positions.len() != 3`
    /// * [Error::TexcoordCount] if `texcoords.len()` is neither 0 nor 3
    pub fn new(positions: &[Vector3], texcoords: &[Vector2]) -> Result<Self> {
        let positions: [Vector3; 3] = positions
            .try_into()
            .map_err(|_| Error::PositionCount(positions.len()))?;
        let texcoords = match texcoords.len() {
            0 => None,
            3 => Some([texcoords[0], texcoords[1], texcoords[2]]),
            n => return Err(Error::TexcoordCount(n)),
        };
        Ok(Self::from_parts(positions, texcoords))
    }

    /// Construct a triangle without texcoords.
    #[inline]
    pub fn untextured(positions: &[Vector3]) -> Result<Self> {
        Self::new(positions, &[])
    }

    /// Construct a triangle from arrays, which can't have the wrong arity.
    #[inline]
    pub fn textured(positions: [Vector3; 3], texcoords: [Vector2; 3]) -> Self {
        Self::from_parts(positions, Some(texcoords))
    }

    fn from_parts(positions: [Vector3; 3], texcoords: Option<[Vector2; 3]>) -> Self {
        let [p0, p1, p2] = &positions;
        let normal = (p1 - p0).cross(&(p2 - p0));
        Self {
            positions,
            texcoords,
            normal,
        }
    }

    /// Corner positions in winding order.
    #[inline]
    pub fn positions(&self) -> &[Vector3; 3] {
        &self.positions
    }

    /// Per-vertex texcoords, or an empty slice if this triangle has none.
    #[inline]
    pub fn texcoords(&self) -> &[Vector2] {
        match &self.texcoords {
            Some(t) => t.as_slice(),
            None => &[],
        }
    }

    /// Whether this triangle carries texcoords.
    #[inline]
    pub fn has_texcoords(&self) -> bool {
        self.texcoords.is_some()
    }

    /// The raw (unnormalized) face normal.
    #[inline]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// The face normal scaled to unit length.
    ///
    /// # Errors
    ///
    /// [Error::ZeroMagnitude] if the triangle is degenerate.
    #[inline]
    pub fn unit_normal(&self) -> Result<Vector3> {
        self.normal.normalize()
    }
}

impl From<[Vector3; 3]> for Triangle {
    fn from(positions: [Vector3; 3]) -> Self {
        Self::from_parts(positions, None)
    }
}
