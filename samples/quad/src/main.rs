//! Writes a square, split into two triangles, as a Wavefront OBJ (and, given an image, MTL) file.

use clap::Parser;
use objgen::{
    ser::{MtlStyle, ObjWriter},
    Channels, Material, Mesh, MeshOptions, Texture, Triangle, Vector2, Vector3,
};

mod cli;

/// Two triangles covering `[0, size]²` on the XY plane, facing +Z, with texcoords spanning the
/// whole image.
fn quad(size: f64, texcoords: bool) -> [Triangle; 2] {
    let p = |x: f64, y: f64| Vector3::new(x * size, y * size, 0.0);
    let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let tri = |[a, b, c]: [usize; 3]| {
        let pos = [a, b, c].map(|i| p(corners[i].0, corners[i].1));
        if texcoords {
            Triangle::textured(pos, [a, b, c].map(|i| Vector2::new(corners[i].0, corners[i].1)))
        } else {
            Triangle::from(pos)
        }
    };
    [tri([0, 1, 2]), tri([0, 2, 3])]
}

fn main() -> Result<(), objgen::Error> {
    let cli = cli::Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let channels = Channels::NONE
        .with_normals(!cli.no_normals)
        .with_texcoords(!cli.no_texcoords);
    let mut mesh = Mesh::new(cli.name.as_str(), MeshOptions::new(channels))?;
    mesh.add_triangles(&quad(cli.size, channels.texcoords))?;

    let material = match &cli.image_name {
        Some(name) => Some(Material::textured(Texture::new(&cli.image_path, name.as_str())?)),
        None => None,
    };
    let mut writer = ObjWriter::new(&mesh).with_mtl_style(if cli.extended_mtl {
        MtlStyle::Extended
    } else {
        MtlStyle::Basic
    });
    if let Some(material) = &material {
        writer = writer.with_material(material);
    }

    let saved = writer.save(&cli.output)?;
    tracing::info!(obj = %saved.obj.display(), mtl = ?saved.mtl, texture = ?saved.texture, "saved mesh");
    Ok(())
}
