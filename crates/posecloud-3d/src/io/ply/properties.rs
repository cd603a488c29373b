use crate::pose::CameraVertex;

/// A scalar property declared in a PLY header.
#[derive(Debug, PartialEq, Clone)]
pub struct PlyPropertyDefinition {
    /// Property name
    pub name: String,
    /// Property scalar type
    pub data_type: PlyDataType,
}

/// PLY scalar types.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlyDataType {
    /// `float` / `float32`
    Float32,
    /// `double` / `float64`
    Float64,
    /// `char` / `int8`
    Int8,
    /// `uchar` / `uint8`
    UInt8,
    /// `short` / `int16`
    Int16,
    /// `ushort` / `uint16`
    UInt16,
    /// `int` / `int32`
    Int32,
    /// `uint` / `uint32`
    UInt32,
}

impl PlyDataType {
    /// Size in bytes of one value in a binary record.
    pub fn size(&self) -> usize {
        match self {
            PlyDataType::Float32 | PlyDataType::Int32 | PlyDataType::UInt32 => 4,
            PlyDataType::Float64 => 8,
            PlyDataType::Int16 | PlyDataType::UInt16 => 2,
            PlyDataType::Int8 | PlyDataType::UInt8 => 1,
        }
    }

    /// Parse a type name as found on a `property` header line.
    pub fn from_header(type_str: &str) -> Result<Self, super::PlyError> {
        match type_str {
            "float" | "float32" => Ok(PlyDataType::Float32),
            "double" | "float64" => Ok(PlyDataType::Float64),
            "char" | "int8" => Ok(PlyDataType::Int8),
            "uchar" | "uint8" => Ok(PlyDataType::UInt8),
            "short" | "int16" => Ok(PlyDataType::Int16),
            "ushort" | "uint16" => Ok(PlyDataType::UInt16),
            "int" | "int32" => Ok(PlyDataType::Int32),
            "uint" | "uint32" => Ok(PlyDataType::UInt32),
            _ => Err(super::PlyError::UnsupportedProperty(type_str.to_string())),
        }
    }

    /// Parse one value of an ascii record.
    pub(crate) fn parse_ascii(&self, s: &str) -> Result<f64, std::num::ParseFloatError> {
        match self {
            PlyDataType::Float32 => s.parse::<f32>().map(f64::from),
            _ => s.parse::<f64>(),
        }
    }

    /// Decode one little endian value from the start of `bytes`.
    ///
    /// PRECONDITION: `bytes.len() >= self.size()`.
    pub(crate) fn read_le(&self, bytes: &[u8]) -> f64 {
        let mut buf = [0u8; 8];
        buf[..self.size()].copy_from_slice(&bytes[..self.size()]);
        match self {
            PlyDataType::Float32 => f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as f64,
            PlyDataType::Float64 => f64::from_le_bytes(buf),
            PlyDataType::Int8 => buf[0] as i8 as f64,
            PlyDataType::UInt8 => buf[0] as f64,
            PlyDataType::Int16 => i16::from_le_bytes([buf[0], buf[1]]) as f64,
            PlyDataType::UInt16 => u16::from_le_bytes([buf[0], buf[1]]) as f64,
            PlyDataType::Int32 => i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as f64,
            PlyDataType::UInt32 => u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as f64,
        }
    }
}

/// Property names of a camera vertex, in file order.
pub const CAMERA_VERTEX_PROPERTIES: [&str; 6] = ["x", "y", "z", "nx", "ny", "nz"];

/// A camera vertex as stored in a PLY file: position and view direction
/// narrowed to single precision.
#[derive(Debug, Clone, Copy, PartialEq, bincode::Encode, bincode::Decode)]
pub struct CameraVertexProperty {
    /// position x
    pub x: f32,
    /// position y
    pub y: f32,
    /// position z
    pub z: f32,
    /// view direction x
    pub nx: f32,
    /// view direction y
    pub ny: f32,
    /// view direction z
    pub nz: f32,
}

impl CameraVertexProperty {
    /// The schema declared in the header for camera vertices.
    pub fn definitions() -> Vec<PlyPropertyDefinition> {
        CAMERA_VERTEX_PROPERTIES
            .iter()
            .map(|name| PlyPropertyDefinition {
                name: name.to_string(),
                data_type: PlyDataType::Float32,
            })
            .collect()
    }

    /// Size in bytes of one binary record.
    pub const fn size_of() -> usize {
        CAMERA_VERTEX_PROPERTIES.len() * std::mem::size_of::<f32>()
    }

    /// Position as double precision.
    pub fn to_point(&self) -> [f64; 3] {
        [self.x as f64, self.y as f64, self.z as f64]
    }

    /// View direction as double precision.
    pub fn to_normal(&self) -> [f64; 3] {
        [self.nx as f64, self.ny as f64, self.nz as f64]
    }
}

impl From<&CameraVertex> for CameraVertexProperty {
    fn from(vertex: &CameraVertex) -> Self {
        let [x, y, z] = vertex.position;
        let [nx, ny, nz] = vertex.view_direction;
        Self {
            x: x as f32,
            y: y as f32,
            z: z as f32,
            nx: nx as f32,
            ny: ny as f32,
            nz: nz as f32,
        }
    }
}

/// Bincode configuration matching the layout of a `binary_little_endian` record.
pub(crate) fn binary_config(
) -> bincode::config::Configuration<bincode::config::LittleEndian, bincode::config::Fixint> {
    bincode::config::standard().with_fixed_int_encoding()
}
