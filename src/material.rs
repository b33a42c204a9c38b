use std::path::{Path, PathBuf};

use crate::{Error, Result, Vector3};

/// The name under which a [Material] is declared and used in output files.
pub const MATERIAL_NAME: &str = "material0";

/// The material name used by geometry that has no textured [Material].
pub const DEFAULT_MATERIAL_NAME: &str = "Default";

/// An image file to be used as a texture, and the directory it's copied from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture {
    source_dir: PathBuf,
    file_name: String,
}

impl Texture {
    /// # Errors
    ///
    /// * [Error::TextureDirNotFound] if `source_dir` doesn't exist
    /// * [Error::InvalidTextureName] if `file_name` is empty, isn't a bare file name, or contains
    ///   a control character
    ///
    /// The image itself isn't checked until it's copied.
    pub fn new(source_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Result<Self> {
        let source_dir = source_dir.into();
        let file_name = file_name.into();
        if file_name.trim().is_empty()
            || file_name.contains(['/', '\\'])
            || file_name.chars().any(char::is_control)
        {
            return Err(Error::InvalidTextureName(file_name));
        }
        if !source_dir.exists() {
            return Err(Error::TextureDirNotFound(source_dir));
        }
        Ok(Self {
            source_dir,
            file_name,
        })
    }

    /// Directory the image is copied from.
    #[inline]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Image file name, as referenced by the material library.
    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// `source_dir/file_name`
    #[inline]
    pub fn source_path(&self) -> PathBuf {
        self.source_dir.join(&self.file_name)
    }
}

/// Phong-style surface parameters, as written to a material library.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// `Ka`
    pub ambient: Vector3,
    /// `Kd`
    pub diffuse: Vector3,
    /// `Ks`
    pub specular: Vector3,
    /// `Ns`; specular exponent, usually within 0..=1000
    pub shininess: f64,
    /// `Ni`; index of refraction, within 0.001..=10
    pub refraction: f64,
    /// `d`; 1.0 is fully opaque
    pub dissolve: f64,
    /// `illum`
    pub illumination: u8,
    /// Used as both the ambient and diffuse map
    pub texture: Option<Texture>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vector3::new(0.0, 0.2, 0.0),
            diffuse: Vector3::new(0.0, 0.8, 0.0),
            specular: Vector3::new(1.0, 1.0, 1.0),
            shininess: 1.0,
            refraction: 1.0,
            dissolve: 1.0,
            illumination: 1,
            texture: None,
        }
    }
}

impl Material {
    /// Default parameters, mapped with `texture`.
    pub fn textured(texture: Texture) -> Self {
        Self::default().with_texture(texture)
    }

    /// Set `ambient`.
    pub fn with_ambient(mut self, ambient: Vector3) -> Self {
        self.ambient = ambient;
        self
    }

    /// Set `diffuse`.
    pub fn with_diffuse(mut self, diffuse: Vector3) -> Self {
        self.diffuse = diffuse;
        self
    }

    /// Set `specular`.
    pub fn with_specular(mut self, specular: Vector3) -> Self {
        self.specular = specular;
        self
    }

    /// Set `shininess`.
    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }

    /// Set `refraction`.
    pub fn with_refraction(mut self, refraction: f64) -> Self {
        self.refraction = refraction;
        self
    }

    /// Set `dissolve`.
    pub fn with_dissolve(mut self, dissolve: f64) -> Self {
        self.dissolve = dissolve;
        self
    }

    /// Set `illumination`.
    pub fn with_illumination(mut self, illumination: u8) -> Self {
        self.illumination = illumination;
        self
    }

    /// Set `texture`.
    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }

    /// The texture, if any.
    #[inline]
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }
}
