use std::fs;

use objgen::{
    ser::{MtlStyle, ObjWriter},
    Channels, Error, ErrorKind, Material, Mesh, MeshOptions, Texture, Triangle, Vector2, Vector3,
};
use tempfile::tempdir;

fn textured_quad() -> Mesh {
    let p = |x, y| Vector3::new(x, y, 0.0);
    let tc = |u, v| Vector2::new(u, v);
    let mut mesh = Mesh::new("test", MeshOptions::new(Channels::NORMALS_TEXCOORDS)).unwrap();
    mesh.add_triangles(&[
        Triangle::textured(
            [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)],
            [tc(0.0, 0.0), tc(1.0, 0.0), tc(1.0, 1.0)],
        ),
        Triangle::textured(
            [p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)],
            [tc(0.0, 0.0), tc(1.0, 1.0), tc(0.0, 1.0)],
        ),
    ])
    .unwrap();
    mesh
}

#[test]
fn missing_output_dir_writes_nothing() {
    let root = tempdir().unwrap();
    let missing = root.path().join("nope");
    let mesh = textured_quad();

    let err = ObjWriter::new(&mesh).save(&missing).unwrap_err();
    assert!(matches!(err, Error::OutputDirNotFound(ref p) if p == &missing));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!missing.exists());
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn output_path_must_be_a_directory() {
    let root = tempdir().unwrap();
    let file = root.path().join("file.txt");
    fs::write(&file, "").unwrap();
    let err = ObjWriter::new(&textured_quad()).save(&file).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn blocked_texture_destination_keeps_geometry() {
    let images = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(images.path().join("t.png"), b"png").unwrap();
    fs::create_dir(out.path().join("t.png")).unwrap();
    let mesh = textured_quad();
    let material = Material::textured(Texture::new(images.path(), "t.png").unwrap());

    let err = ObjWriter::new(&mesh)
        .with_material(&material)
        .save(out.path())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, Error::Io { ref path, .. } if path == &out.path().join("t.png")));

    assert!(out.path().join("test.obj").is_file());
    assert!(!out.path().join("test.mtl").exists());
}

#[test]
fn missing_texture_image_fails_copy() {
    let images = tempdir().unwrap();
    let out = tempdir().unwrap();
    let mesh = textured_quad();
    let material = Material::textured(Texture::new(images.path(), "test.jpg").unwrap());
    let writer = ObjWriter::new(&mesh).with_material(&material);

    // text generation doesn't touch the image
    assert!(writer.obj_string().starts_with("o test\nmtllib test.mtl\n"));
    assert!(writer.mtl_string().is_some());

    let err = writer.save(out.path()).unwrap_err();
    assert!(matches!(err, Error::TextureNotFound(ref p) if p == &images.path().join("test.jpg")));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // the geometry file stays; nothing else is written
    assert!(out.path().join("test.obj").is_file());
    assert!(!out.path().join("test.mtl").exists());
    assert!(!out.path().join("test.jpg").exists());
}

#[test]
fn untextured_save_writes_only_geometry() {
    let out = tempdir().unwrap();
    let mut mesh = Mesh::new("plain", MeshOptions::default()).unwrap();
    mesh.add_triangle(&Triangle::from([
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    ]))
    .unwrap();

    let saved = ObjWriter::new(&mesh).save(out.path()).unwrap();
    assert_eq!(saved.obj, out.path().join("plain.obj"));
    assert!(saved.mtl.is_none());
    assert!(saved.texture.is_none());
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
    assert_eq!(
        fs::read_to_string(&saved.obj).unwrap(),
        ObjWriter::new(&mesh).obj_string()
    );
}

#[test]
fn textured_save_writes_file_pair_and_copies_image() {
    let images = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(images.path().join("test.jpg"), b"\xff\xd8\xff\xe0jpeg").unwrap();

    let mesh = textured_quad();
    let material = Material::textured(Texture::new(images.path(), "test.jpg").unwrap());
    let saved = ObjWriter::new(&mesh)
        .with_material(&material)
        .with_mtl_style(MtlStyle::Extended)
        .save(out.path())
        .unwrap();

    assert_eq!(saved.mtl.as_deref(), Some(out.path().join("test.mtl").as_path()));
    assert_eq!(
        fs::read(out.path().join("test.jpg")).unwrap(),
        b"\xff\xd8\xff\xe0jpeg"
    );

    let obj = fs::read_to_string(&saved.obj).unwrap();
    assert_eq!(
        obj,
        "o test\n\
         mtllib test.mtl\n\
         v 0.0 0.0 0.0\n\
         v 1.0 0.0 0.0\n\
         v 1.0 1.0 0.0\n\
         v 0.0 1.0 0.0\n\
         vn 0.0 0.0 1.0\n\
         vt 0.0 0.0\n\
         vt 1.0 0.0\n\
         vt 1.0 1.0\n\
         vt 0.0 1.0\n\
         usemtl material0\n\
         f 1/1/1 2/2/1 3/3/1\n\
         f 1/1/1 3/3/1 4/4/1\n"
    );
    let mtl = fs::read_to_string(out.path().join("test.mtl")).unwrap();
    assert!(mtl.starts_with("newmtl material0\nKa 0.0 0.2 0.0\nKd 0.0 0.8 0.0\nKs 1.0 1.0 1.0\n"));
    assert!(mtl.ends_with("illum 1\nmap_Ka test.jpg\nmap_Kd test.jpg\n"));
}

#[test]
fn saved_files_load_with_tobj() {
    let images = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(images.path().join("test.jpg"), b"jpeg").unwrap();
    let mesh = textured_quad();
    let material = Material::textured(Texture::new(images.path(), "test.jpg").unwrap());
    let saved = ObjWriter::new(&mesh)
        .with_material(&material)
        .save(out.path())
        .unwrap();

    let (models, materials) = tobj::load_obj(&saved.obj, &tobj::LoadOptions::default()).unwrap();
    assert_eq!(models.len(), 1);
    let m = &models[0].mesh;
    assert_eq!(m.positions.len(), 4 * 3);
    assert_eq!(m.indices, [0, 1, 2, 0, 2, 3]);
    assert_eq!(m.texcoord_indices, [0, 1, 2, 0, 2, 3]);
    assert_eq!(m.normal_indices, [0; 6]);
    assert_eq!(m.material_id, Some(0));
    assert_eq!(materials.unwrap().len(), 1);
}
