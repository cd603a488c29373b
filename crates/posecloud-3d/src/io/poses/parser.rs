use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::{PoseLogError, PoseRecord, POSE_LINE_FIELDS};

/// Read a camera pose log and return a vector of PoseRecord structs.
///
/// The first line is a header and is skipped whatever its content. Every
/// following line must hold exactly [`POSE_LINE_FIELDS`] fields.
///
/// # Arguments
///
/// * `path` - The path to the pose log.
///
/// # Returns
///
/// The poses in file order. Fails on the first malformed line.
pub fn read_poses_txt(path: impl AsRef<Path>) -> Result<Vec<PoseRecord>, PoseLogError> {
    // open the file and create a buffered reader
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let poses = reader
        .split(b'\n')
        .enumerate()
        .skip(1)
        .map(|(index, bytes)| -> Result<PoseRecord, PoseLogError> {
            let line_number = index + 1;
            let mut bytes = bytes.map_err(PoseLogError::from)?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let line = String::from_utf8(bytes).map_err(|e| PoseLogError::ParseError {
                line_number,
                reason: format!("invalid UTF-8: {}", e.utf8_error()),
                line: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            })?;
            parse_pose_line(line_number, &line)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(poses)
}

/// Parse a single pose log data line.
///
/// #   TIMESTAMP, FILE_PREFIX, T[0..3], R[0..9]
///
/// # Arguments
///
/// * `line_number` - The 1-based line number, used in error reports.
/// * `line` - The raw line.
pub fn parse_pose_line(line_number: usize, line: &str) -> Result<PoseRecord, PoseLogError> {
    // split the line into parts by whitespace
    let parts = line.split_whitespace().collect::<Vec<_>>();

    if parts.len() != POSE_LINE_FIELDS {
        return Err(PoseLogError::InvalidFieldCount {
            line_number,
            expected: POSE_LINE_FIELDS,
            found: parts.len(),
            line: line.to_string(),
        });
    }

    let parse = |index: usize| -> Result<f64, PoseLogError> {
        parts[index]
            .parse::<f64>()
            .map_err(|e| PoseLogError::ParseError {
                line_number,
                reason: format!("field {} ({:?}): {}", index + 1, parts[index], e),
                line: line.to_string(),
            })
    };

    let mut values = [0.0; 12];
    for (i, value) in values.iter_mut().enumerate() {
        *value = parse(i + 2)?;
    }

    Ok(PoseRecord {
        timestamp: parse(0)?,
        file_prefix: parts[1].to_string(),
        translation: [values[0], values[1], values[2]],
        rotation: [
            [values[3], values[4], values[5]],
            [values[6], values[7], values[8]],
            [values[9], values[10], values[11]],
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_pose_line() -> Result<(), PoseLogError> {
        let pose = parse_pose_line(2, "0 frame_0001 1.0 2.0 3.0 1 0 0 0 1 0 0 0 1")?;
        assert_eq!(pose.timestamp, 0.0);
        assert_eq!(pose.file_prefix, "frame_0001");
        assert_eq!(pose.translation, [1.0, 2.0, 3.0]);
        assert_eq!(
            pose.rotation,
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
        Ok(())
    }

    #[test]
    fn test_parse_pose_line_row_major() -> Result<(), PoseLogError> {
        let pose = parse_pose_line(2, "1.5 7 0 0 0 1 2 3 4 5 6 7 8 9")?;
        assert_eq!(pose.timestamp, 1.5);
        assert_eq!(pose.file_prefix, "7");
        assert_eq!(
            pose.rotation,
            [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]
        );
        Ok(())
    }

    #[test]
    fn test_parse_pose_line_tabs_and_carriage_return() -> Result<(), PoseLogError> {
        let pose = parse_pose_line(2, "0\tf 1e-3 -2 3\t1 0 0 0 1 0 0 0 1\r")?;
        assert_eq!(pose.translation, [1e-3, -2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_parse_pose_line_wrong_field_count() {
        let err = parse_pose_line(5, "0 f 1 2 3 1 0 0 0 1").unwrap_err();
        match err {
            PoseLogError::InvalidFieldCount {
                line_number,
                expected,
                found,
                ref line,
            } => {
                assert_eq!(line_number, 5);
                assert_eq!(expected, 14);
                assert_eq!(found, 10);
                assert_eq!(line, "0 f 1 2 3 1 0 0 0 1");
            }
            _ => panic!("expected a field count error, got {err:?}"),
        }
        assert_eq!(err.line_number(), Some(5));
    }

    #[test]
    fn test_parse_pose_line_too_many_fields() {
        let err = parse_pose_line(3, "0 f 1 2 3 1 0 0 0 1 0 0 0 1 9").unwrap_err();
        assert!(matches!(
            err,
            PoseLogError::InvalidFieldCount { found: 15, .. }
        ));
    }

    #[test]
    fn test_parse_pose_line_not_a_number() {
        let err = parse_pose_line(4, "0 f 1 two 3 1 0 0 0 1 0 0 0 1").unwrap_err();
        match err {
            PoseLogError::ParseError {
                line_number,
                ref reason,
                ..
            } => {
                assert_eq!(line_number, 4);
                assert!(reason.contains("two"));
            }
            _ => panic!("expected a parse error, got {err:?}"),
        }
    }

    #[test]
    fn test_parse_pose_line_bad_timestamp() {
        let err = parse_pose_line(2, "t0 f 1 2 3 1 0 0 0 1 0 0 0 1").unwrap_err();
        assert!(matches!(err, PoseLogError::ParseError { .. }));
    }

    #[test]
    fn test_read_poses_txt() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "1 2 3 this header is never parsed")?;
        writeln!(file, "0 frame_0001 1.0 2.0 3.0 1 0 0 0 1 0 0 0 1")?;
        writeln!(file, "0.1 frame_0002 4.0 5.0 6.0 0 -1 0 1 0 0 0 0 1")?;

        let poses = read_poses_txt(file.path())?;
        assert_eq!(poses.len(), 2);
        assert_eq!(poses[0].file_prefix, "frame_0001");
        assert_eq!(poses[1].file_prefix, "frame_0002");
        assert_eq!(poses[1].translation, [4.0, 5.0, 6.0]);
        assert_eq!(poses[1].rotation[0], [0.0, -1.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_read_poses_txt_header_only() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "timestamp file_prefix")?;
        let poses = read_poses_txt(file.path())?;
        assert!(poses.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_poses_txt_reports_line_number() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "header")?;
        writeln!(file, "0 a 1 2 3 1 0 0 0 1 0 0 0 1")?;
        writeln!(file, "1 b 1 2 3 1 0 0 0 1")?;
        writeln!(file, "2 c 1 2 3 1 0 0 0 1 0 0 0 1")?;

        let err = read_poses_txt(file.path()).unwrap_err();
        assert_eq!(err.line_number(), Some(3));
        Ok(())
    }

    #[test]
    fn test_read_poses_txt_invalid_utf8() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"header \xfe\n0 a 1 2 3 1 0 0 0 1 0 0 0 1\r\n0 f\xff 1 2 3 1 0 0 0 1 0 0 0 1\n")?;

        let err = read_poses_txt(file.path()).unwrap_err();
        match err {
            PoseLogError::ParseError {
                line_number,
                ref reason,
                ref line,
            } => {
                assert_eq!(line_number, 3);
                assert!(reason.contains("UTF-8"));
                assert!(line.starts_with("0 f\u{FFFD} 1 2 3"));
            }
            _ => panic!("expected a parse error, got {err:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_read_poses_txt_missing_file() {
        let err = read_poses_txt("/this/path/does/not/exist.txt").unwrap_err();
        assert!(matches!(err, PoseLogError::IoError(_)));
        assert_eq!(err.line_number(), None);
    }
}
