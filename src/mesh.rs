//! The indexed mesh builder.
//!
//! # Notes
//!
//! * A [Mesh] only grows: triangles are added, never removed.
//! * Each added triangle becomes exactly one [Face], and each of its three corners adds at most
//!   one value to each recorded pool.
//! * A [Mesh] is mutated through `&mut self` and does no locking of its own. When several
//!   producers feed one mesh, put it behind a `Mutex`/`RwLock`.

mod channel;
mod face;

pub use channel::*;
pub use face::*;

use objgen_common::ArrayIndex;

use crate::{pool::AttributePool, Error, Result, Triangle, Vector2, Vector3};

/// A named triangle mesh with deduplicated attribute pools.
#[derive(Debug, Clone)]
pub struct Mesh<Idx: ArrayIndex = u32> {
    name: String,
    options: MeshOptions,
    positions: AttributePool<Vector3, Idx>,
    normals: AttributePool<Vector3, Idx>,
    texcoords: AttributePool<Vector2, Idx>,
    faces: Vec<Face<Idx>>,
}

impl Mesh {
    /// Construct an empty mesh with `u32` pool indices.
    ///
    /// `name` is used as the file stem when the mesh is saved.
    ///
    /// # Errors
    ///
    /// * [Error::EmptyName] if `name` is empty or whitespace
    /// * [Error::InvalidName] if `name` contains a path separator or a control character
    pub fn new(name: impl Into<String>, options: MeshOptions) -> Result<Self> {
        Self::with_index(name, options)
    }
}

impl<Idx: ArrayIndex> Mesh<Idx> {
    /// Construct an empty mesh with pool indices of type `Idx`.
    ///
    /// See [Mesh::new].
    pub fn with_index(name: impl Into<String>, options: MeshOptions) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        if name.contains(['/', '\\']) || name.chars().any(char::is_control) {
            return Err(Error::InvalidName(name));
        }
        crate::event!(debug, mesh = %name, ?options, "created mesh");
        Ok(Self {
            name,
            options,
            positions: AttributePool::default(),
            normals: AttributePool::default(),
            texcoords: AttributePool::default(),
            faces: Vec::new(),
        })
    }

    /// Pool the attributes of `triangle` and append a [Face] referencing them.
    ///
    /// # Errors
    ///
    /// Checked before anything is pooled:
    ///
    /// * [Error::MissingTexcoords] if this mesh records texcoords and `triangle` has none
    /// * [Error::UnexpectedTexcoords] if this mesh doesn't record texcoords and `triangle` has them
    /// * [Error::ZeroMagnitude] if normals are recorded with [NormalPolicy::Unit] and `triangle` is degenerate
    ///
    /// Checked while pooling; values pooled before the failure stay pooled, but no face is added:
    ///
    /// * [Error::IndexOverflow] if a pool can't address another value
    pub fn add_triangle(&mut self, triangle: &Triangle) -> Result<&Face<Idx>> {
        let channels = self.options.channels;
        match (channels.texcoords, triangle.has_texcoords()) {
            (true, false) => return Err(Error::MissingTexcoords(self.name.clone())),
            (false, true) => return Err(Error::UnexpectedTexcoords(self.name.clone())),
            _ => (),
        }
        let normal = if channels.normals {
            Some(self.options.normal_policy.normal_of(triangle)?)
        } else {
            None
        };

        let normal = normal.map(|n| self.normals.insert(n)).transpose()?;
        let positions = triangle.positions();
        let texcoords = triangle.texcoords();
        let mut corner = |i: usize| -> Result<FaceVertex<Idx>> {
            Ok(FaceVertex {
                position: self.positions.insert(positions[i])?,
                texcoord: if channels.texcoords {
                    Some(self.texcoords.insert(texcoords[i])?)
                } else {
                    None
                },
                normal,
            })
        };
        let face = Face([corner(0)?, corner(1)?, corner(2)?]);

        crate::event!(trace, mesh = %self.name, face = self.faces.len(), "added triangle");
        self.faces.push(face);
        Ok(&self.faces[self.faces.len() - 1])
    }

    /// Add each triangle of `triangles` in order, stopping at the first failure.
    ///
    /// Returns the number of faces added.
    pub fn add_triangles<'t>(
        &mut self,
        triangles: impl IntoIterator<Item = &'t Triangle>,
    ) -> Result<usize> {
        let mut added = 0;
        for triangle in triangles {
            self.add_triangle(triangle)?;
            added += 1;
        }
        Ok(added)
    }

    /// The name, also used as the output file stem.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Construction parameters.
    #[inline]
    pub fn options(&self) -> MeshOptions {
        self.options
    }

    /// Shorthand for `self.options().channels`.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.options.channels
    }

    /// Unique positions, in first-seen order.
    #[inline]
    pub fn positions(&self) -> &AttributePool<Vector3, Idx> {
        &self.positions
    }

    /// Unique normals, in first-seen order; empty unless normals are recorded.
    #[inline]
    pub fn normals(&self) -> &AttributePool<Vector3, Idx> {
        &self.normals
    }

    /// Unique texcoords, in first-seen order; empty unless texcoords are recorded.
    #[inline]
    pub fn texcoords(&self) -> &AttributePool<Vector2, Idx> {
        &self.texcoords
    }

    /// Faces, in insertion order.
    #[inline]
    pub fn faces(&self) -> &[Face<Idx>] {
        &self.faces
    }

    /// Number of faces added.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The number of unique values pooled for `channel`.
    pub fn pool_len(&self, channel: Channel) -> usize {
        match channel {
            Channel::Position => self.positions.len(),
            Channel::Normal => self.normals.len(),
            Channel::Texcoord => self.texcoords.len(),
            Channel::Color => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    static_assertions::assert_impl_all!(Mesh: Send, Sync);

    fn square() -> [Triangle; 2] {
        let p = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        [
            Triangle::from([p[0], p[1], p[2]]),
            Triangle::from([p[0], p[2], p[3]]),
        ]
    }

    #[test]
    fn rejects_bad_names() {
        let opts = MeshOptions::default();
        assert!(matches!(Mesh::new("", opts), Err(Error::EmptyName)));
        assert!(matches!(Mesh::new("  ", opts), Err(Error::EmptyName)));
        for bad in ["a/b", "a\\b", "a\nv 9.0 9.0 9.0", "a\tb", "a\r"] {
            let err = Mesh::new(bad, opts).unwrap_err();
            assert!(matches!(err, Error::InvalidName(_)), "{bad:?}");
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn shared_edge_is_pooled_once() {
        let mut mesh = Mesh::new("t", MeshOptions::new(Channels::NORMALS)).unwrap();
        assert_eq!(mesh.add_triangles(&square()).unwrap(), 2);
        assert_eq!(mesh.pool_len(Channel::Position), 4);
        assert_eq!(mesh.pool_len(Channel::Normal), 1);
        assert_eq!(mesh.pool_len(Channel::Texcoord), 0);

        let second = mesh.faces()[1].vertices();
        assert_eq!(second.map(|v| v.position()), [0, 2, 3]);
        assert!(second.iter().all(|v| v.normal() == Some(0)));
        assert!(second.iter().all(|v| v.texcoord().is_none()));
    }

    #[test]
    fn disabled_normals_are_absent() {
        let mut mesh = Mesh::new("t", MeshOptions::new(Channels::NONE)).unwrap();
        let face = *mesh.add_triangle(&square()[0]).unwrap();
        assert!(face.vertices().iter().all(|v| v.normal().is_none()));
        assert!(mesh.normals().is_empty());
    }

    #[test]
    fn texcoord_flag_mismatch() {
        let [plain, _] = square();
        let textured = Triangle::textured(
            *plain.positions(),
            [
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
                Vector2::new(1.0, 1.0),
            ],
        );

        let mut mesh = Mesh::new("t", MeshOptions::new(Channels::TEXCOORDS)).unwrap();
        let err = mesh.add_triangle(&plain).unwrap_err();
        assert!(matches!(err, Error::MissingTexcoords(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(mesh.positions().is_empty());
        mesh.add_triangle(&textured).unwrap();
        assert_eq!(mesh.pool_len(Channel::Texcoord), 3);

        let mut mesh = Mesh::new("t", MeshOptions::new(Channels::NONE)).unwrap();
        let err = mesh.add_triangle(&textured).unwrap_err();
        assert!(matches!(err, Error::UnexpectedTexcoords(_)));
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn unit_normal_policy() {
        let opts = MeshOptions::new(Channels::NORMALS).with_normal_policy(NormalPolicy::Unit);
        let mut mesh = Mesh::new("t", opts).unwrap();
        let big = Triangle::from([
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(4.0, 0.0, 0.0),
            Vector3::new(0.0, 4.0, 0.0),
        ]);
        mesh.add_triangles(square().iter().chain([&big])).unwrap();
        assert_eq!(mesh.normals().as_slice(), &[Vector3::new(0.0, 0.0, 1.0)]);

        let p = Vector3::new(1.0, 2.0, 3.0);
        let err = mesh.add_triangle(&Triangle::from([p, p, p])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivideByZero);
        assert_eq!(mesh.face_count(), 3);
    }

    #[test]
    fn raw_normal_policy_keeps_magnitude() {
        let mut mesh = Mesh::new("t", MeshOptions::new(Channels::NORMALS)).unwrap();
        mesh.add_triangle(&Triangle::from([
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(4.0, 0.0, 0.0),
            Vector3::new(0.0, 4.0, 0.0),
        ]))
        .unwrap();
        assert_eq!(mesh.normals()[0], Vector3::new(0.0, 0.0, 16.0));
    }

    #[test]
    fn colors_are_reserved() {
        let mut mesh =
            Mesh::new("t", MeshOptions::new(Channels::NONE.with_colors(true))).unwrap();
        mesh.add_triangles(&square()).unwrap();
        assert!(mesh.channels().contains(Channel::Color));
        assert_eq!(mesh.pool_len(Channel::Color), 0);
    }

    #[test]
    fn small_index_type() {
        let mut mesh = Mesh::<u8>::with_index("t", MeshOptions::new(Channels::NONE)).unwrap();
        for i in 0..85 {
            let x = f64::from(i);
            mesh.add_triangle(&Triangle::from([
                Vector3::new(x, 0.0, 0.0),
                Vector3::new(x, 1.0, 0.0),
                Vector3::new(x, 0.0, 1.0),
            ]))
            .unwrap();
        }
        // 255 positions pooled; the next new position needs index 255, which still fits
        let err = (85..87)
            .map(|i| {
                let x = f64::from(i);
                mesh.add_triangle(&Triangle::from([
                    Vector3::new(x, 0.0, 0.0),
                    Vector3::new(x, 1.0, 0.0),
                    Vector3::new(x, 0.0, 1.0),
                ]))
                .map(|_| ())
            })
            .find_map(Result::err)
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::IndexOverflow);
        assert_eq!(mesh.pool_len(Channel::Position), 256);
        assert_eq!(mesh.face_count(), 85);
    }
}
