/// PLY reader and writer module.
pub mod ply;

/// Camera pose log reader and writer module.
pub mod poses;
