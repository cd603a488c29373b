#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Pose log to point cloud conversion.
pub mod convert;

/// I/O utilities for reading and writing pose logs and point clouds.
pub mod io;

/// Linear algebra utilities.
pub mod linalg;

/// Point cloud container.
pub mod pointcloud;

/// Camera pose to camera vertex transforms.
pub mod pose;
