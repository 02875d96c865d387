//! Command-line renderer for lume.

mod cli;
mod scene;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use log::info;
use lume_render::{render_parallel, Camera, Film, Point3, RenderSettings, Vec3};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use cli::{Args, SceneKind};

const ASPECT_RATIO: f64 = 3.0 / 2.0;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let settings = RenderSettings {
        width: args.width,
        height: (args.width as f64 / ASPECT_RATIO) as u32,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
    };

    let mut scene_rng = SmallRng::seed_from_u64(args.seed);
    let (world, camera) = match args.scene {
        SceneKind::Cover => (scene::random_scene(&mut scene_rng), cover_camera()),
        SceneKind::ThreeSpheres => (scene::three_spheres(), front_camera()),
    };
    info!("Scene {:?} with {} objects", args.scene, world.len());

    let film = render_parallel(&camera, &world, &settings, args.seed);

    write_output(&film, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("Wrote {}", args.output.display());

    Ok(())
}

/// The book-cover shot: high and to the right, with a narrow field of
/// view and a slight defocus blur focused on the glass sphere.
fn cover_camera() -> Camera {
    Camera::new(
        Point3::new(13.0, 2.0, 3.0),
        Point3::ZERO,
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        ASPECT_RATIO,
        0.1,
        10.0,
    )
}

/// Pinhole camera at the origin looking straight down -z.
fn front_camera() -> Camera {
    Camera::new(
        Point3::ZERO,
        Point3::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
        90.0,
        ASPECT_RATIO,
        0.0,
        1.0,
    )
}

/// Write the film to `path`; "-" streams PPM to stdout, a `.ppm`
/// extension writes the same format to a file, and anything else goes
/// through the image crate.
fn write_output(film: &Film, path: &Path) -> anyhow::Result<()> {
    if path.as_os_str() == "-" {
        let stdout = io::stdout();
        film.write_ppm(&mut stdout.lock())?;
        return Ok(());
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ppm") => {
            let mut out = BufWriter::new(File::create(path)?);
            film.write_ppm(&mut out)?;
            out.flush()?;
        }
        _ => film.save(path)?,
    }
    Ok(())
}
