use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::{PoseLogError, PoseRecord, POSE_LOG_HEADER};

/// Write poses to a pose log readable by [`super::read_poses_txt`].
///
/// A header line is written first, then one line per pose in the
/// `timestamp file_prefix T[0..3] R[0..9]` layout, rotation row-major.
pub fn write_poses_txt(path: impl AsRef<Path>, poses: &[PoseRecord]) -> Result<(), PoseLogError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{POSE_LOG_HEADER}")?;

    for pose in poses {
        let [t0, t1, t2] = pose.translation;
        write!(writer, "{} {} {} {} {}", pose.timestamp, pose.file_prefix, t0, t1, t2)?;
        for value in pose.rotation.iter().flatten() {
            write!(writer, " {value}")?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;

    Ok(())
}
