use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use glam::Vec3;
use log::{error, info};
use minifb::{Key, Scale, Window, WindowOptions};
use simplelog::{Config, LevelFilter, SimpleLogger};

use scanline_renderer::{
    create_clap_command, handle_clap_matches, Attribute, Color, DisplayTarget, Renderer,
    TrianglePart,
};

fn main() -> io::Result<()> {
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());

    let matches = create_clap_command().get_matches();
    let (target, out_path, size) = handle_clap_matches(&matches);

    let mut renderer = Renderer::new(size, size);
    render_demo_scene(&mut renderer);

    match target {
        DisplayTarget::File => run_file(&renderer, &out_path),
        DisplayTarget::Window => run_win(&renderer),
    }
}

/// Three overlapping triangles at different depths, so the nearest one wins
/// wherever they stack.
fn render_demo_scene(renderer: &mut Renderer) {
    let s = renderer.width as f32;
    renderer.begin_frame();

    let scene = [
        (
            Color::RED,
            [
                Vec3::new(0.10 * s, 0.15 * s, 0.60),
                Vec3::new(0.85 * s, 0.25 * s, 0.60),
                Vec3::new(0.30 * s, 0.90 * s, 0.60),
            ],
        ),
        (
            Color::GREEN,
            [
                Vec3::new(0.55 * s, 0.10 * s, 0.40),
                Vec3::new(0.95 * s, 0.80 * s, 0.40),
                Vec3::new(0.15 * s, 0.65 * s, 0.40),
            ],
        ),
        (
            Color::BLUE,
            [
                Vec3::new(0.40 * s, 0.30 * s, 0.80),
                Vec3::new(0.90 * s, 0.55 * s, 0.80),
                Vec3::new(0.50 * s, 0.95 * s, 0.80),
            ],
        ),
    ];

    for (color, verts) in &scene {
        renderer.put_attributes(&[Attribute::FlatColor(*color)]);
        renderer.put_triangle(&[TrianglePart::Positions(*verts)]);
    }
    info!("rendered {} triangles at {}x{}", scene.len(), renderer.width, renderer.height);
}

fn run_file(renderer: &Renderer, path: &Path) -> io::Result<()> {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            error!("could not create {}: {}", path.display(), e);
            return Err(e);
        }
    };
    let mut out = BufWriter::new(file);
    renderer.buffer().write_ppm(&mut out)?;
    info!("wrote {}", path.display());
    Ok(())
}

fn run_win(renderer: &Renderer) -> io::Result<()> {
    let mut window = match Window::new(
        "Scanline Renderer",
        renderer.width,
        renderer.height,
        WindowOptions {
            resize: false,
            scale: Scale::X1,
            ..WindowOptions::default()
        },
    ) {
        Ok(window) => window,
        Err(e) => {
            error!("unable to open window: {}", e);
            return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
        }
    };

    while window.is_open() {
        if window.is_key_down(Key::Escape) || window.is_key_down(Key::Q) {
            break;
        }
        renderer.buffer().present_window(&mut window)?;
    }

    Ok(())
}
