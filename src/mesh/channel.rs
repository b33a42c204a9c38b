use crate::{Result, Triangle, Vector3};

/// A named per-vertex attribute channel of a [Mesh](crate::Mesh).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Vertex positions; always recorded.
    Position,
    /// Flat face normals.
    Normal,
    /// Texture coordinates.
    Texcoord,
    /// Reserved; accepted as a flag, never pooled or written.
    Color,
}

/// Which optional channels a [Mesh](crate::Mesh) records. Positions are always recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channels {
    /// Record one normal per face.
    pub normals: bool,
    /// Record per-corner texcoords.
    pub texcoords: bool,
    /// See [Channel::Color].
    pub colors: bool,
}

impl Channels {
    /// Positions only.
    pub const NONE: Self = Self::new(false, false, false);
    /// Positions and normals.
    pub const NORMALS: Self = Self::new(true, false, false);
    /// Positions and texcoords.
    pub const TEXCOORDS: Self = Self::new(false, true, false);
    /// Positions, normals, and texcoords.
    pub const NORMALS_TEXCOORDS: Self = Self::new(true, true, false);

    /// Choose each optional channel explicitly.
    #[inline]
    pub const fn new(normals: bool, texcoords: bool, colors: bool) -> Self {
        Self {
            normals,
            texcoords,
            colors,
        }
    }

    /// Set `normals`.
    #[inline]
    pub const fn with_normals(mut self, normals: bool) -> Self {
        self.normals = normals;
        self
    }

    /// Set `texcoords`.
    #[inline]
    pub const fn with_texcoords(mut self, texcoords: bool) -> Self {
        self.texcoords = texcoords;
        self
    }

    /// Set `colors`.
    #[inline]
    pub const fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Whether `channel` is recorded.
    pub fn contains(self, channel: Channel) -> bool {
        match channel {
            Channel::Position => true,
            Channel::Normal => self.normals,
            Channel::Texcoord => self.texcoords,
            Channel::Color => self.colors,
        }
    }
}

/// Normals on, texcoords off.
impl Default for Channels {
    fn default() -> Self {
        Self::NORMALS
    }
}

/// How a triangle's face normal is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalPolicy {
    /// Store `cross(p1 - p0, p2 - p0)` as-is; its length is twice the triangle's area.
    #[default]
    Raw,
    /// Scale to unit length before pooling. Degenerate triangles are rejected.
    Unit,
}

impl NormalPolicy {
    /// The normal of `triangle` as it will be pooled.
    pub fn normal_of(self, triangle: &Triangle) -> Result<Vector3> {
        match self {
            NormalPolicy::Raw => Ok(triangle.normal()),
            NormalPolicy::Unit => triangle.unit_normal(),
        }
    }
}

/// Construction parameters of a [Mesh](crate::Mesh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeshOptions {
    /// Which channels to record.
    pub channels: Channels,
    /// Applies only when normals are recorded.
    pub normal_policy: NormalPolicy,
}

impl MeshOptions {
    /// Options recording `channels`, with the default [NormalPolicy].
    #[inline]
    pub const fn new(channels: Channels) -> Self {
        Self {
            channels,
            normal_policy: NormalPolicy::Raw,
        }
    }

    /// Set `normal_policy`.
    #[inline]
    pub const fn with_normal_policy(mut self, normal_policy: NormalPolicy) -> Self {
        self.normal_policy = normal_policy;
        self
    }
}
