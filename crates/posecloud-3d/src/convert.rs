use std::path::Path;

use crate::io::ply::{write_ply, PlyEncoding, PlyError};
use crate::io::poses::{read_poses_txt, PoseLogError};
use crate::pose::camera_vertices_from_poses;

/// Error types for the conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Failed to read the pose log
    #[error(transparent)]
    PoseLog(#[from] PoseLogError),

    /// Failed to write the point cloud
    #[error(transparent)]
    Ply(#[from] PlyError),
}

/// Convert a camera pose log into a PLY file of camera vertices.
///
/// The whole pose log is read and validated before anything is written, so a
/// malformed input never creates the output file.
///
/// # Arguments
///
/// * `poses_path` - The pose log to read.
/// * `ply_path` - The PLY file to write. Overwritten if it exists.
/// * `encoding` - Encoding of the PLY vertex data.
///
/// # Returns
///
/// The number of vertices written.
pub fn convert_poses_to_ply(
    poses_path: impl AsRef<Path>,
    ply_path: impl AsRef<Path>,
    encoding: PlyEncoding,
) -> Result<usize, ConvertError> {
    let (poses_path, ply_path) = (poses_path.as_ref(), ply_path.as_ref());

    log::info!("reading camera poses from {}", poses_path.display());
    let poses = read_poses_txt(poses_path)?;
    log::debug!("parsed {} poses", poses.len());

    let vertices = camera_vertices_from_poses(&poses);

    log::info!(
        "writing {} camera vertices to {}",
        vertices.len(),
        ply_path.display()
    );
    write_ply(ply_path, &vertices, encoding)?;

    log::info!("done");

    Ok(vertices.len())
}
