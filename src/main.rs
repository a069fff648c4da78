use anyhow::{bail, Context, Result};
use fixed_raytracer::{
    render_frame,
    scene::{self, Scene},
    screen::{render_dir_name, AnsiTerminal, FrameBuffer},
    trig::SineTable,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::{env, fs};

const DEFAULT_SCENE: &str = "scene.json";
const USAGE: &str = "usage: fixed_raytracer [--scene PATH] [--frames N] [--upscale N] [--ansi] [--no-png] [--quiet|-q]";

struct Options {
    quiet: bool,
    ansi: bool,
    png: bool,
    scene: Option<PathBuf>,
    /// 0 renders until interrupted.
    frames: Option<u32>,
    upscale: u32,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut opts = Options {
        quiet: false,
        ansi: false,
        png: true,
        scene: None,
        frames: None,
        upscale: 8,
    };

    let mut it = args.iter().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--quiet" | "-q" => opts.quiet = true,
            "--ansi" => opts.ansi = true,
            "--no-png" => opts.png = false,
            "--scene" => {
                let path = it.next().context("--scene needs a path")?;
                opts.scene = Some(PathBuf::from(path));
            }
            "--frames" => {
                let n = it.next().context("--frames needs a count")?;
                opts.frames = Some(n.parse().with_context(|| format!("bad frame count {n:?}"))?);
            }
            "--upscale" => {
                let n = it.next().context("--upscale needs a factor")?;
                opts.upscale = n.parse().with_context(|| format!("bad upscale {n:?}"))?;
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unknown argument {other:?}\n{USAGE}"),
        }
    }
    Ok(opts)
}

fn load_scene(path: Option<&Path>) -> Result<Scene> {
    match path {
        Some(p) => scene::load(p).with_context(|| format!("loading {}", p.display())),
        None if Path::new(DEFAULT_SCENE).exists() => {
            scene::load(DEFAULT_SCENE).with_context(|| format!("loading {DEFAULT_SCENE}"))
        }
        None => {
            info!("no {DEFAULT_SCENE}, using the built-in scene");
            Ok(Scene::reference())
        }
    }
}

fn log_scene(scene: &Scene) {
    let cam = &scene.camera;
    info!("=== CAMERA ===");
    info!(" position : {:?}", cam.pos);
    info!(" focal    : {}", cam.focal);
    info!(" fov step : {}", cam.fov_step);
    info!(" frame    : {}x{}", cam.width, cam.height);

    info!("=== SPHERES ({}) ===", scene.spheres.len());
    for (i, s) in scene.spheres.iter().enumerate() {
        info!(
            " [{}] '{}' {{ center: {:?}, radius: {}, color: #{:06X}, reflectance: {}, bob: {} }}",
            i, s.name, s.center, s.radius, s.material.color.0, s.material.reflectance, s.bob
        );
    }

    info!("=== FLOOR ===");
    info!(
        " y = {} checker #{:06X}/#{:06X}",
        scene.plane.y, scene.plane.odd.0, scene.plane.even.0
    );
    info!("=== LIGHT ===");
    info!(" pos: {:?}, orbit radius: {}", scene.light.pos, scene.light.orbit_radius);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let opts = parse_args(&args)?;

    let mut scene = load_scene(opts.scene.as_deref())?;
    log_scene(&scene);

    let frames = opts.frames.unwrap_or(scene.render.frames);
    let (width, height) = (scene.camera.width, scene.camera.height);

    let out_dir = if opts.png {
        let dir = PathBuf::from(render_dir_name(width, height, frames));
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        Some(dir)
    } else {
        None
    };

    let mut terminal = opts.ansi.then(AnsiTerminal::stdout);

    // the progress bar and the terminal view would fight over stdout
    let bar = if opts.quiet || opts.ansi {
        None
    } else if frames == 0 {
        Some(ProgressBar::new_spinner())
    } else {
        let pb = ProgressBar::new(frames as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} frames | {elapsed_precise} | ETA: {eta}")?);
        Some(pb)
    };

    let mut fb = FrameBuffer::new(width, height);
    let mut tick = 0;
    let mut frame = 0u32;

    while frames == 0 || frame < frames {
        tick = (tick + scene.render.tick_step).rem_euclid(360);
        scene.advance(tick, &SineTable);

        let stats = render_frame(&scene, &mut fb);
        frame += 1;
        debug!(
            "frame {frame}: {} primary, {} passes, {} shadow, depth {}, {} px changed",
            stats.primary, stats.passes, stats.shadow, stats.deepest, fb.changed()
        );

        if let Some(dir) = &out_dir {
            let path = dir.join(format!("frame_{frame:04}.png"));
            fb.to_image(opts.upscale)
                .save(&path)
                .with_context(|| format!("saving {}", path.display()))?;
        }
        if let Some(term) = terminal.as_mut() {
            term.present(&fb, &format!("frame {frame}  tick {tick}"))
                .context("writing to terminal")?;
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
    }

    if let Some(b) = bar {
        b.finish_with_message("Rendering complete");
    }
    match out_dir {
        Some(dir) => info!("Saved {frame} frames → {}", dir.display()),
        None => info!("Rendered {frame} frames"),
    }
    Ok(())
}
