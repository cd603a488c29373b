/// Number of whitespace separated fields on a pose log data line.
///
/// `timestamp file_prefix T0 T1 T2 R0 R1 R2 R3 R4 R5 R6 R7 R8`
pub const POSE_LINE_FIELDS: usize = 14;

/// Header line written at the top of a pose log.
pub const POSE_LOG_HEADER: &str = "timestamp file_prefix \
    translation[0] translation[1] translation[2] \
    rotation[0][0] rotation[0][1] rotation[0][2] \
    rotation[1][0] rotation[1][1] rotation[1][2] \
    rotation[2][0] rotation[2][1] rotation[2][2]";

/// A timestamped camera pose as logged by the SLAM system.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseRecord {
    /// Frame timestamp
    pub timestamp: f64,
    /// Frame file prefix, kept as an opaque token
    pub file_prefix: String,
    /// Translation
    pub translation: [f64; 3], // x, y, z
    /// Rotation matrix, row-major
    pub rotation: [[f64; 3]; 3],
}
