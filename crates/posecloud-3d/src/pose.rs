use crate::io::poses::PoseRecord;
use crate::linalg;

/// The camera viewing axis expressed in the camera frame.
pub const CAMERA_FORWARD: [f64; 3] = [0.0, 0.0, 1.0];

/// A camera as a point cloud vertex: its position and where it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraVertex {
    /// Camera position in the world frame
    pub position: [f64; 3],
    /// Camera forward axis in the world frame, stored as the vertex normal
    pub view_direction: [f64; 3],
}

/// Compute the camera vertex of a pose.
///
/// position = -Rᵗ · t and view_direction = Rᵗ · (0, 0, 1).
///
/// # Arguments
///
/// * `rotation` - The pose rotation matrix, row-major.
/// * `translation` - The pose translation vector.
///
/// # Returns
///
/// The camera vertex. The view direction keeps the norm of the rotation rows,
/// it is not normalized.
///
/// Example:
///
/// ```
/// use posecloud_3d::pose::camera_vertex_from_pose;
///
/// let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let vertex = camera_vertex_from_pose(&rotation, &[1.0, 2.0, 3.0]);
/// assert_eq!(vertex.position, [-1.0, -2.0, -3.0]);
/// assert_eq!(vertex.view_direction, [0.0, 0.0, 1.0]);
/// ```
pub fn camera_vertex_from_pose(rotation: &[[f64; 3]; 3], translation: &[f64; 3]) -> CameraVertex {
    let rotation_t = linalg::transpose33(rotation);
    let rt_t = linalg::mat33_mul_vec3(&rotation_t, translation);

    CameraVertex {
        position: [-rt_t[0], -rt_t[1], -rt_t[2]],
        view_direction: linalg::mat33_mul_vec3(&rotation_t, &CAMERA_FORWARD),
    }
}

impl From<&PoseRecord> for CameraVertex {
    fn from(pose: &PoseRecord) -> Self {
        camera_vertex_from_pose(&pose.rotation, &pose.translation)
    }
}

/// Compute the camera vertices of a sequence of poses, preserving order.
pub fn camera_vertices_from_poses(poses: &[PoseRecord]) -> Vec<CameraVertex> {
    poses.iter().map(CameraVertex::from).collect()
}
