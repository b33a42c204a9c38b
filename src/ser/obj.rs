//! Utilities for serializing [Meshes](crate::Mesh) to [Wavefront OBJ](https://paulbourke.net/dataformats/obj/).
//!
//! # Notes
//!
//! ## Geometry File Structure
//!
//! Statements written, in order:
//!
//! * `o <name>`: object name
//! * `mtllib <name>.mtl`: material library; only if the material has a texture
//! * `v <x> <y> <z>`: one per pooled position
//! * `vn <x> <y> <z>`: one per pooled normal; only if the mesh records normals
//! * `vt <u> <v>`: one per pooled texcoord; only if the mesh records texcoords
//! * `usemtl <material0 | Default>`
//! * `f <a> <b> <c>`: one per face, in insertion order. Each corner is a vertex reference:
//!   - `p`: position only
//!   - `p/t`: position & texcoord
//!   - `p//n`: position & normal
//!   - `p/t/n`: all three
//!
//! Indices are 1-based; the first value of each pool is index `1`.
//!
//! ## Saving
//!
//! [ObjWriter::save] writes `<name>.obj`, and, if the material has a texture, copies the image
//! and writes `<name>.mtl`. Files are written one at a time; if a later step fails, files already
//! written are left in place.

use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use objgen_common::ArrayIndex;

use crate::{
    ser::{MtlStyle, MtlText},
    Error, FaceVertex, Material, Mesh, Result, Texture, DEFAULT_MATERIAL_NAME, MATERIAL_NAME,
};

/// Renders a [Mesh] (and optionally a [Material]) as OBJ/MTL text, and saves them to disk.
#[derive(Debug, Clone, Copy)]
pub struct ObjWriter<'m, Idx: ArrayIndex = u32> {
    mesh: &'m Mesh<Idx>,
    material: Option<&'m Material>,
    mtl_style: MtlStyle,
}

/// Paths written by [ObjWriter::save].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFiles {
    /// The geometry file.
    pub obj: PathBuf,
    /// The material library, if the material has a texture.
    pub mtl: Option<PathBuf>,
    /// The copied texture image.
    pub texture: Option<PathBuf>,
}

impl<'m, Idx: ArrayIndex> ObjWriter<'m, Idx> {
    /// A writer for `mesh` with no material.
    pub fn new(mesh: &'m Mesh<Idx>) -> Self {
        Self {
            mesh,
            material: None,
            mtl_style: MtlStyle::default(),
        }
    }

    /// Set `material`.
    pub fn with_material(mut self, material: &'m Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Set `mtl_style`.
    pub fn with_mtl_style(mut self, mtl_style: MtlStyle) -> Self {
        self.mtl_style = mtl_style;
        self
    }

    /// The attached texture, if any. Only a textured material is referenced by the geometry file.
    #[inline]
    pub fn texture(&self) -> Option<&'m Texture> {
        self.material.and_then(Material::texture)
    }

    /// `<name>.obj`
    pub fn obj_file_name(&self) -> String {
        format!("{}.obj", self.mesh.name())
    }

    /// `<name>.mtl`
    pub fn mtl_file_name(&self) -> String {
        format!("{}.mtl", self.mesh.name())
    }

    /// Geometry text.
    #[inline]
    pub fn obj(&self) -> ObjText<'_, Idx> {
        ObjText { writer: self }
    }

    /// Material text, if there's a textured material.
    #[inline]
    pub fn mtl(&self) -> Option<MtlText<'m>> {
        self.material
            .and_then(|material| MtlText::new(material, self.mtl_style))
    }

    /// The geometry text.
    #[inline]
    pub fn obj_string(&self) -> String {
        self.obj().to_string()
    }

    /// `None` unless the material has a texture.
    #[inline]
    pub fn mtl_string(&self) -> Option<String> {
        self.mtl().map(|mtl| mtl.to_string())
    }

    /// Write the geometry text to `out`.
    pub fn write_obj<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self.obj())
    }

    /// Writes nothing if there's no textured material.
    pub fn write_mtl<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self.mtl() {
            Some(mtl) => write!(out, "{mtl}"),
            None => Ok(()),
        }
    }

    /// Write `<name>.obj` into `output_dir`. If there's a textured material, also copy its image
    /// into `output_dir` and write `<name>.mtl`.
    ///
    /// # Errors
    ///
    /// * [Error::OutputDirNotFound] if `output_dir` isn't an existing directory; nothing is written
    /// * [Error::TextureNotFound] if the texture image doesn't exist; the `.obj` file has already
    ///   been written, the `.mtl` file hasn't
    /// * [Error::Io] if a file couldn't be written or copied
    pub fn save(&self, output_dir: impl AsRef<Path>) -> Result<SavedFiles> {
        let dir = output_dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::OutputDirNotFound(dir.to_path_buf()));
        }

        let obj = dir.join(self.obj_file_name());
        write_text(&obj, &self.obj())?;
        let mut saved = SavedFiles {
            obj,
            mtl: None,
            texture: None,
        };

        if let Some(mtl) = self.mtl() {
            saved.texture = Some(copy_texture(mtl.texture(), dir)?);
            let path = dir.join(self.mtl_file_name());
            write_text(&path, &mtl)?;
            saved.mtl = Some(path);
        }

        Ok(saved)
    }
}

/// [Display](fmt::Display)s the geometry file of an [ObjWriter].
#[derive(Debug, Clone, Copy)]
pub struct ObjText<'w, Idx: ArrayIndex = u32> {
    writer: &'w ObjWriter<'w, Idx>,
}

impl<Idx: ArrayIndex> fmt::Display for ObjText<'_, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.writer;
        let mesh = w.mesh;
        let channels = mesh.channels();

        writeln!(f, "o {}", mesh.name())?;
        if w.texture().is_some() {
            writeln!(f, "mtllib {}", w.mtl_file_name())?;
        }
        for v in mesh.positions() {
            writeln!(f, "v {v}")?;
        }
        if channels.normals {
            for vn in mesh.normals() {
                writeln!(f, "vn {vn}")?;
            }
        }
        if channels.texcoords {
            for vt in mesh.texcoords() {
                writeln!(f, "vt {vt}")?;
            }
        }
        match w.texture() {
            Some(_) => writeln!(f, "usemtl {MATERIAL_NAME}")?,
            None => writeln!(f, "usemtl {DEFAULT_MATERIAL_NAME}")?,
        }
        for face in mesh.faces() {
            let [a, b, c] = face.vertices();
            writeln!(f, "f {} {} {}", VertexRef(a), VertexRef(b), VertexRef(c))?;
        }
        Ok(())
    }
}

/// A face corner as an OBJ vertex reference.
struct VertexRef<'v, Idx: ArrayIndex>(&'v FaceVertex<Idx>);

impl<Idx: ArrayIndex> fmt::Display for VertexRef<'_, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let one_based = |idx: Idx| idx.position() + 1;
        let v = self.0;
        write!(f, "{}", one_based(v.position()))?;
        match (v.texcoord(), v.normal()) {
            (None, None) => Ok(()),
            (Some(t), None) => write!(f, "/{}", one_based(t)),
            // an empty texcoord slot keeps `n` in the normal position
            (None, Some(n)) => write!(f, "//{}", one_based(n)),
            (Some(t), Some(n)) => write!(f, "/{}/{}", one_based(t), one_based(n)),
        }
    }
}

fn write_text(path: &Path, text: &impl fmt::Display) -> Result<()> {
    let file = File::create(path).map_err(Error::io(path))?;
    let mut out = BufWriter::new(file);
    write!(out, "{text}").map_err(Error::io(path))?;
    out.flush().map_err(Error::io(path))?;
    crate::event!(info, path = %path.display(), "wrote file");
    Ok(())
}

fn copy_texture(texture: &Texture, output_dir: &Path) -> Result<PathBuf> {
    let src = texture.source_path();
    if !src.is_file() {
        crate::event!(warn, src = %src.display(), "texture image not found");
        return Err(Error::TextureNotFound(src));
    }
    let dst = output_dir.join(texture.file_name());
    if same_file(&src, &dst) {
        crate::event!(debug, path = %dst.display(), "texture image already in place");
        return Ok(dst);
    }
    copy_image(&src, &dst)?;
    crate::event!(info, src = %src.display(), dst = %dst.display(), "copied texture image");
    Ok(dst)
}

/// Open failures are attributed to `src`; everything after that to `dst`.
fn copy_image(src: &Path, dst: &Path) -> Result<()> {
    let mut input = File::open(src).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::TextureNotFound(src.to_owned()),
        _ => Error::io(src)(e),
    })?;
    let mut output = File::create(dst).map_err(Error::io(dst))?;
    io::copy(&mut input, &mut output).map_err(Error::io(dst))?;
    Ok(())
}

/// Copying a file onto itself would truncate it.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
