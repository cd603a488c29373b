use argh::FromArgs;
use std::path::PathBuf;

use posecloud_3d::{
    convert::{convert_poses_to_ply, ConvertError},
    io::ply::PlyEncoding,
};

#[derive(FromArgs)]
/// Write the camera positions and viewing directions of a pose log to a PLY file
struct Args {
    /// path to the camera pose log
    #[argh(positional)]
    poses_path: PathBuf,

    /// path to the PLY file to write
    #[argh(positional)]
    ply_path: PathBuf,
}

fn run(args: &Args) -> Result<usize, ConvertError> {
    convert_poses_to_ply(&args.poses_path, &args.ply_path, PlyEncoding::Ascii)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    match run(&args) {
        Ok(num_vertices) => log::debug!("wrote #{} camera vertices", num_vertices),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
