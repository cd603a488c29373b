use std::{
    io::{BufWriter, Write},
    path::Path,
};

use super::{
    properties::{binary_config, CameraVertexProperty, CAMERA_VERTEX_PROPERTIES},
    PlyEncoding, PlyError,
};
use crate::pose::CameraVertex;

/// Write camera vertices to a PLY file.
///
/// The file holds a single `vertex` element with the `x y z nx ny nz` float
/// properties, one entry per camera in input order. The data is written to a
/// temporary file next to `path` which then replaces `path`, so a failed write
/// never leaves a truncated file behind. An existing destination keeps its
/// permissions, a new one gets the mode a plain file create would give it.
///
/// # Arguments
///
/// * `path` - The destination path. Overwritten if it exists.
/// * `vertices` - The camera vertices to write.
/// * `encoding` - Encoding of the vertex data.
pub fn write_ply(
    path: impl AsRef<Path>,
    vertices: &[CameraVertex],
    encoding: PlyEncoding,
) -> Result<(), PlyError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = create_temp_file(parent, path)?;
    {
        let mut writer = BufWriter::new(&mut file);
        write_ply_to(&mut writer, vertices, encoding)?;
        writer.flush()?;
    }

    file.persist(path).map_err(|e| PlyError::Io(e.error))?;

    Ok(())
}

fn create_temp_file(parent: &Path, path: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".posecloud");

    // 0666 before the umask, as `File::create` does
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let file = builder.tempfile_in(parent)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }

    Ok(file)
}

/// Serialize camera vertices as PLY into any writer.
pub fn write_ply_to<W: Write>(
    writer: &mut W,
    vertices: &[CameraVertex],
    encoding: PlyEncoding,
) -> Result<(), PlyError> {
    write_header(writer, vertices.len(), encoding)?;

    for vertex in vertices {
        let property = CameraVertexProperty::from(vertex);
        match encoding {
            PlyEncoding::Ascii => {
                let values = [
                    property.x,
                    property.y,
                    property.z,
                    property.nx,
                    property.ny,
                    property.nz,
                ];
                for (i, value) in values.into_iter().enumerate() {
                    if i > 0 {
                        write!(writer, " ")?;
                    }
                    write_ascii_value(writer, value)?;
                }
                writeln!(writer)?;
            }
            PlyEncoding::BinaryLittleEndian => {
                bincode::encode_into_std_write(property, writer, binary_config())?;
            }
        }
    }

    Ok(())
}

// shortest round-trip digits, in exponent form outside [1e-4, 1e7)
fn write_ascii_value<W: Write>(writer: &mut W, value: f32) -> std::io::Result<()> {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e7).contains(&magnitude) {
        write!(writer, "{value:e}")
    } else {
        write!(writer, "{value}")
    }
}

fn write_header<W: Write>(
    writer: &mut W,
    vertex_count: usize,
    encoding: PlyEncoding,
) -> Result<(), PlyError> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format {} 1.0", encoding.as_str())?;
    writeln!(writer, "element vertex {vertex_count}")?;
    for name in CAMERA_VERTEX_PROPERTIES {
        writeln!(writer, "property float {name}")?;
    }
    writeln!(writer, "end_header")?;
    Ok(())
}
