use std::path::PathBuf;

use clap::{Arg, Command};

pub mod core;
pub mod pipeline;

pub use crate::core::{Color, Intensity, Pixel, DEPTH_INFINITY};
pub use crate::pipeline::{Attribute, PixelBuffer, Renderer, TrianglePart};

#[derive(Debug, Clone, Copy)]
pub enum DisplayTarget {
    File,
    Window,
}

pub fn create_clap_command() -> Command {
    Command::new("scanline_renderer")
        .about("Scanline triangle rasterizer with depth buffering")
        .version("0.1")
        .subcommand(
            Command::new("render")
                .about("Render the demo scene to a PPM file or a window (using minifb)")
                .arg(
                    Arg::new("mode")
                        .short('m')
                        .long("mode")
                        .value_name("MODE")
                        .help("Specify the mode ('file', 'window', 'f', or 'w')")
                        .required(false)
                        .value_parser(["file", "window", "f", "w"]),
                )
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .value_name("PATH")
                        .help("Where to write the PPM image in file mode")
                        .required(false),
                )
                .arg(
                    Arg::new("size")
                        .short('s')
                        .long("size")
                        .value_name("PIXELS")
                        .help("Square frame size in pixels")
                        .required(false)
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

pub fn handle_clap_matches(matches: &clap::ArgMatches) -> (DisplayTarget, PathBuf, usize) {
    if let Some(("render", sub_matches)) = matches.subcommand() {
        let mode = sub_matches
            .get_one::<String>("mode")
            .map(|s| s.as_str())
            .unwrap_or("file");
        let out = sub_matches
            .get_one::<String>("out")
            .map(|s| s.as_str())
            .unwrap_or("frame.ppm");
        let size = sub_matches.get_one::<usize>("size").copied().unwrap_or(512);

        let target = match mode {
            "file" | "f" => DisplayTarget::File,
            "window" | "w" => DisplayTarget::Window,
            _ => {
                eprintln!("Invalid mode: {}. Defaulting to file.", mode);
                DisplayTarget::File
            }
        };
        return (target, PathBuf::from(out), size);
    }

    // Default behavior when no subcommand is provided
    (DisplayTarget::File, PathBuf::from("frame.ppm"), 512)
}
