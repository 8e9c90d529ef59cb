use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use defocus_core::{FxFyCxCy, PointSet, Pt3, Real, SimCamera, ThinLens};
use defocus_render::{compare_scatter, ray_diagram, render_defocus, render_pinhole, Scene};

#[derive(Debug, Parser)]
#[command(
    name = "defocus",
    version,
    about = "Pinhole vs thin-lens camera projection simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare pinhole and thin-lens projections of a point set.
    Compare(CompareArgs),
    /// Render the synthetic demo scene with and without defocus blur.
    Scene(SceneArgs),
    /// Write the schematic pinhole-vs-lens ray diagram.
    Diagram(DiagramArgs),
}

#[derive(Debug, Args)]
struct CompareArgs {
    /// Path to a JSON array of [x, y, z] camera-frame points.
    #[arg(long)]
    points: PathBuf,

    /// Intrinsics as fx,fy,cx,cy (pixels).
    #[arg(long, value_parser = parse_intrinsics)]
    intrinsics: FxFyCxCy<Real>,

    /// Lens as f,N,do (focal length, f-number, focus distance; same length
    /// unit as the point depths).
    #[arg(long, value_parser = parse_lens)]
    lens: ThinLens,

    /// Maximum acceptable blur-disc diameter; adds a depth-of-field report
    /// and an in/out column to the table.
    #[arg(long)]
    coc_max: Option<Real>,

    /// Optional two-panel scatter PNG comparing both renditions.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Canvas size for --out, as WIDTHxHEIGHT.
    #[arg(long, default_value = "1280x720", value_parser = parse_size)]
    size: (u32, u32),
}

#[derive(Debug, Args)]
struct SceneArgs {
    /// Output directory for scene_pinhole.png and scene_lens.png.
    #[arg(long)]
    out: PathBuf,

    /// Scene width in pixels.
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Scene height in pixels.
    #[arg(long, default_value_t = 250)]
    height: u32,

    /// Lens as f,N,do in meters (scene depths span roughly 1-8 m).
    #[arg(long, default_value = "0.05,2.8,1.2", value_parser = parse_lens)]
    lens: ThinLens,

    /// Pixels per meter on the sensor plane (fx / f).
    #[arg(long, default_value_t = 18_000.0)]
    px_per_unit: Real,
}

#[derive(Debug, Args)]
struct DiagramArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas size as WIDTHxHEIGHT.
    #[arg(long, default_value = "1000x400", value_parser = parse_size)]
    size: (u32, u32),
}

fn parse_components(s: &str, expected: usize, what: &str) -> Result<Vec<Real>, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != expected {
        return Err(format!(
            "{what} needs {expected} comma-separated values, got {}",
            parts.len()
        ));
    }
    parts
        .iter()
        .map(|p| {
            p.trim()
                .parse::<Real>()
                .map_err(|e| format!("{what}: bad number {p:?}: {e}"))
        })
        .collect()
}

fn parse_intrinsics(s: &str) -> Result<FxFyCxCy<Real>, String> {
    let v = parse_components(s, 4, "--intrinsics")?;
    Ok(FxFyCxCy {
        fx: v[0],
        fy: v[1],
        cx: v[2],
        cy: v[3],
    })
}

fn parse_lens(s: &str) -> Result<ThinLens, String> {
    let v = parse_components(s, 3, "--lens")?;
    Ok(ThinLens {
        focal_length: v[0],
        f_number: v[1],
        focus_distance: v[2],
    })
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("size must be WIDTHxHEIGHT, got {s:?}"))?;
    let parse = |p: &str| {
        p.trim()
            .parse::<u32>()
            .map_err(|e| format!("size: bad number {p:?}: {e}"))
    };
    Ok((parse(w)?, parse(h)?))
}

fn load_points(path: &Path) -> Result<PointSet> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading points file {}", path.display()))?;
    let points: Vec<Pt3> = serde_json::from_str(&data)
        .with_context(|| format!("parsing points file {}", path.display()))?;
    PointSet::new(points)
}

/// Build the comparison table (and lens report) for a point set.
fn compare_report(engine: &SimCamera, points: &PointSet, coc_max: Option<Real>) -> Result<String> {
    // Fails here when the focus distance equals the focal length, before
    // any per-point work.
    let d_i_focus = engine.lens().image_distance()?;

    let mut out = String::new();
    writeln!(
        out,
        "lens: f={} N={} focus={}  aperture={:.4}  image_distance={:.4}",
        engine.lens().focal_length,
        engine.lens().f_number,
        engine.lens().focus_distance,
        engine.lens().aperture(),
        d_i_focus
    )?;

    let dof = match coc_max {
        Some(coc) => {
            let h = engine.lens().hyperfocal_distance(coc)?;
            let dof = engine.lens().depth_of_field(coc)?;
            writeln!(
                out,
                "hyperfocal={h:.3}  dof_near={:.3}  dof_far={}",
                dof.near,
                if dof.is_far_unbounded() {
                    "inf".to_string()
                } else {
                    format!("{:.3}", dof.far)
                }
            )?;
            Some(dof)
        }
        None => None,
    };

    write!(
        out,
        "{:>5} {:>12} {:>12} {:>14} {:>11}",
        "idx", "u", "v", "blur_pinhole", "blur_lens"
    )?;
    if dof.is_some() {
        write!(out, " {:>7}", "in_dof")?;
    }
    writeln!(out)?;

    let visible = engine.project_visible(points.points());
    for (idx, p) in &visible {
        write!(
            out,
            "{:>5} {:>12.3} {:>12.3} {:>14.3} {:>11.3}",
            idx, p.u, p.v, 0.0, p.blur_radius
        )?;
        if let Some(dof) = &dof {
            let z = points.points()[*idx].z;
            write!(out, " {:>7}", if dof.contains(z) { "yes" } else { "no" })?;
        }
        writeln!(out)?;
    }

    let skipped = points.len() - visible.len();
    if skipped > 0 {
        writeln!(out, "({skipped} point(s) skipped, see warnings)")?;
    }
    Ok(out)
}

fn run_compare(args: &CompareArgs) -> Result<()> {
    let engine = SimCamera::new(args.intrinsics, args.lens)?;
    let points = load_points(&args.points)?;

    let report = compare_report(&engine, &points, args.coc_max)?;
    print!("{report}");

    if let Some(out) = &args.out {
        let projected: Vec<_> = engine
            .project_visible(points.points())
            .into_iter()
            .map(|(_, p)| p)
            .collect();
        let (w, h) = args.size;
        let panel = compare_scatter(&projected, w, h);
        panel
            .save(out)
            .with_context(|| format!("writing {}", out.display()))?;
        log::info!("wrote {}", out.display());
    }
    Ok(())
}

fn run_scene(args: &SceneArgs) -> Result<()> {
    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let scene = Scene::synthetic(args.width, args.height);
    let pinhole = render_pinhole(&scene);
    let lens = render_defocus(&scene, &args.lens, args.px_per_unit)?;

    let pinhole_path = args.out.join("scene_pinhole.png");
    let lens_path = args.out.join("scene_lens.png");
    pinhole
        .save(&pinhole_path)
        .with_context(|| format!("writing {}", pinhole_path.display()))?;
    lens.save(&lens_path)
        .with_context(|| format!("writing {}", lens_path.display()))?;
    println!(
        "wrote {} and {}",
        pinhole_path.display(),
        lens_path.display()
    );
    Ok(())
}

fn run_diagram(args: &DiagramArgs) -> Result<()> {
    let (w, h) = args.size;
    let img = ray_diagram(w, h);
    img.save(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Compare(args) => run_compare(args),
        Command::Scene(args) => run_scene(args),
        Command::Diagram(args) => run_diagram(args),
    }
}
