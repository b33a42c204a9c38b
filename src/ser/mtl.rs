//! Wavefront material library (`.mtl`) text.
//!
//! # Notes
//!
//! Statements written, in order:
//!
//! * `newmtl`: declares the material; always [MATERIAL_NAME]
//! * `Ka`: ambient color, light scattered about the entire scene; RGB within 0..=1
//! * `Kd`: diffuse color; multiplied by the `map_Kd` texture when rendering
//! * `Ks`, `Ns`, `Ni`, `d`: specular color, specular exponent, index of refraction, and
//!   dissolve; only with [MtlStyle::Extended], since many importers (and most 3D printing
//!   workflows) ignore them
//! * `illum`: illumination model
//! * `map_Ka`, `map_Kd`: the texture image, as a path relative to the `.mtl` file
//!
//! # See Also
//!
//! * [MTL reference](https://paulbourke.net/dataformats/mtl/)

use std::fmt;

use crate::{Material, Texture, MATERIAL_NAME};

/// Which statements a material library includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MtlStyle {
    /// `Ka`, `Kd`, `illum`, and the texture maps.
    #[default]
    Basic,
    /// [MtlStyle::Basic], plus `Ks`, `Ns`, `Ni`, and `d`.
    Extended,
}

/// [Display](fmt::Display)s a textured [Material] as a material library.
#[derive(Debug, Clone, Copy)]
pub struct MtlText<'m> {
    pub(crate) material: &'m Material,
    pub(crate) texture: &'m Texture,
    pub(crate) style: MtlStyle,
}

impl<'m> MtlText<'m> {
    /// Returns `None` if `material` has no texture; untextured materials aren't written.
    pub fn new(material: &'m Material, style: MtlStyle) -> Option<Self> {
        material.texture().map(|texture| Self {
            material,
            texture,
            style,
        })
    }

    /// The texture referenced by the `map_*` statements.
    #[inline]
    pub fn texture(&self) -> &'m Texture {
        self.texture
    }
}

impl fmt::Display for MtlText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.material;
        writeln!(f, "newmtl {MATERIAL_NAME}")?;
        writeln!(f, "Ka {}", m.ambient)?;
        writeln!(f, "Kd {}", m.diffuse)?;
        if self.style == MtlStyle::Extended {
            writeln!(f, "Ks {}", m.specular)?;
            writeln!(f, "Ns {:?}", m.shininess)?;
            writeln!(f, "Ni {:?}", m.refraction)?;
            writeln!(f, "d {:?}", m.dissolve)?;
        }
        writeln!(f, "illum {}", m.illumination)?;
        writeln!(f, "map_Ka {}", self.texture.file_name())?;
        writeln!(f, "map_Kd {}", self.texture.file_name())
    }
}
