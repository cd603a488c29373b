use std::io::{BufRead, Read};
use std::path::Path;

use super::{
    properties::{binary_config, CameraVertexProperty, PlyDataType, PlyPropertyDefinition},
    PlyEncoding, PlyError,
};
use crate::pointcloud::PointCloud;

// upper bound on vertices reserved ahead of reading, the header count is untrusted
const MAX_RESERVED_VERTICES: usize = 1 << 16;

struct PlyHeader {
    pub encoding: PlyEncoding,
    pub vertex_count: usize,
    pub properties: Vec<PlyPropertyDefinition>,
    // number of lines up to and including `end_header`
    pub num_lines: usize,
}

impl PlyHeader {
    fn index_of(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    fn reserved_vertices(&self) -> usize {
        self.vertex_count.min(MAX_RESERVED_VERTICES)
    }

    fn is_camera_vertex(&self) -> bool {
        self.properties == CameraVertexProperty::definitions()
    }
}

fn parse_header<R: BufRead>(reader: &mut R) -> Result<PlyHeader, PlyError> {
    let mut line = String::new();
    let mut num_lines = 0;
    let mut is_ply = false;
    let mut has_end_header = false;
    let mut encoding = None;
    let mut vertex_count = None;
    let mut in_vertex_element = false;
    let mut properties = Vec::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        num_lines += 1;

        let parts = line.split_whitespace().collect::<Vec<_>>();
        match parts.as_slice() {
            ["ply"] if num_lines == 1 => is_ply = true,
            ["end_header"] => {
                has_end_header = true;
                break;
            }
            ["format", format, _version] => encoding = Some(PlyEncoding::from_header(format)?),
            [] | ["comment", ..] | ["obj_info", ..] => {}
            ["element", name, count] => {
                in_vertex_element = *name == "vertex";
                if in_vertex_element {
                    let count = count
                        .parse::<usize>()
                        .map_err(|_| PlyError::MalformedHeader(line.trim().to_string()))?;
                    vertex_count = Some(count);
                } else if vertex_count.is_none() {
                    // vertex data must come first in the body
                    return Err(PlyError::UnsupportedProperty(format!("element {name}")));
                }
            }
            ["property", rest @ ..] => {
                if in_vertex_element {
                    match rest {
                        [data_type, name] => properties.push(PlyPropertyDefinition {
                            name: name.to_string(),
                            data_type: PlyDataType::from_header(data_type)?,
                        }),
                        _ => return Err(PlyError::UnsupportedProperty(line.trim().to_string())),
                    }
                }
            }
            _ => return Err(PlyError::MalformedHeader(line.trim().to_string())),
        }
    }

    if !is_ply || !has_end_header {
        return Err(PlyError::MalformedHeader(
            "missing `ply` magic or `end_header`".to_string(),
        ));
    }

    Ok(PlyHeader {
        encoding: encoding.ok_or_else(|| PlyError::MalformedHeader("missing format".to_string()))?,
        vertex_count: vertex_count
            .ok_or_else(|| PlyError::MalformedHeader("missing vertex element".to_string()))?,
        properties,
        num_lines,
    })
}

fn read_ascii_rows<R: BufRead>(
    reader: &mut R,
    header: &PlyHeader,
) -> Result<Vec<Vec<f64>>, PlyError> {
    let mut rows = Vec::with_capacity(header.reserved_vertices());
    let mut line = String::new();

    for i in 0..header.vertex_count {
        let line_number = header.num_lines + i + 1;
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(PlyError::ParseError(format!(
                "expected {} vertices, found {}",
                header.vertex_count, i
            )));
        }

        let parts = line.split_whitespace().collect::<Vec<_>>();
        if parts.len() != header.properties.len() {
            return Err(PlyError::ParseError(format!(
                "line {line_number}: expected {} values, found {}",
                header.properties.len(),
                parts.len()
            )));
        }

        let row = parts
            .iter()
            .zip(&header.properties)
            .map(|(s, p)| {
                p.data_type
                    .parse_ascii(s)
                    .map_err(|e| PlyError::ParseError(format!("line {line_number}: {s}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(row);
    }

    Ok(rows)
}

fn read_binary_rows<R: Read>(reader: &mut R, header: &PlyHeader) -> Result<Vec<Vec<f64>>, PlyError> {
    let row_size: usize = header.properties.iter().map(|p| p.data_type.size()).sum();
    let mut buffer = vec![0u8; row_size];
    let mut rows = Vec::with_capacity(header.reserved_vertices());

    for _ in 0..header.vertex_count {
        reader.read_exact(&mut buffer)?;
        let mut offset = 0;
        let row = header
            .properties
            .iter()
            .map(|p| {
                let value = p.data_type.read_le(&buffer[offset..]);
                offset += p.data_type.size();
                value
            })
            .collect::<Vec<_>>();
        rows.push(row);
    }

    Ok(rows)
}

fn read_camera_vertices<R: Read>(
    reader: &mut R,
    header: &PlyHeader,
) -> Result<PointCloud, PlyError> {
    let mut buffer = vec![0u8; CameraVertexProperty::size_of()];
    let mut points = Vec::with_capacity(header.reserved_vertices());
    let mut normals = Vec::with_capacity(header.reserved_vertices());

    for _ in 0..header.vertex_count {
        reader.read_exact(&mut buffer)?;
        let (property, _): (CameraVertexProperty, usize) =
            bincode::decode_from_slice(&buffer, binary_config())?;
        points.push(property.to_point());
        normals.push(property.to_normal());
    }

    Ok(PointCloud::new(points, Some(normals)))
}

fn rows_to_pointcloud(header: &PlyHeader, rows: Vec<Vec<f64>>) -> Result<PointCloud, PlyError> {
    let lookup = |names: [&str; 3]| -> Option<[usize; 3]> {
        Some([
            header.index_of(names[0])?,
            header.index_of(names[1])?,
            header.index_of(names[2])?,
        ])
    };

    let xyz = lookup(["x", "y", "z"])
        .ok_or_else(|| PlyError::UnsupportedProperty("vertex without x, y, z".to_string()))?;
    let nxyz = lookup(["nx", "ny", "nz"]);

    let points = rows
        .iter()
        .map(|row| [row[xyz[0]], row[xyz[1]], row[xyz[2]]])
        .collect();
    let normals = nxyz.map(|n| {
        rows.iter()
            .map(|row| [row[n[0]], row[n[1]], row[n[2]]])
            .collect()
    });

    Ok(PointCloud::new(points, normals))
}

/// Read the vertices of a PLY file.
///
/// Both `ascii` and `binary_little_endian` encodings are supported. The vertex
/// element must be the first element of the file and hold scalar properties
/// only; `x`, `y` and `z` are required, `nx`, `ny` and `nz` are read as normals
/// when all three are present.
///
/// # Arguments
///
/// * `path` - The path to the PLY file.
///
/// # Returns
///
/// A point cloud with one point per vertex, in file order.
pub fn read_ply(path: impl AsRef<Path>) -> Result<PointCloud, PlyError> {
    let file = std::fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);
    let header = parse_header(&mut reader)?;

    match header.encoding {
        PlyEncoding::BinaryLittleEndian if header.is_camera_vertex() => {
            read_camera_vertices(&mut reader, &header)
        }
        PlyEncoding::BinaryLittleEndian => {
            let rows = read_binary_rows(&mut reader, &header)?;
            rows_to_pointcloud(&header, rows)
        }
        PlyEncoding::Ascii => {
            let rows = read_ascii_rows(&mut reader, &header)?;
            rows_to_pointcloud(&header, rows)
        }
    }
}
