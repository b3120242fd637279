//! Builds a propeller from a profile file and exports its GPU buffers.
//!
//! Run: `cargo run -p foil-mesh -- <profile> [options]`

use config::constants::GlobalConfig;
use foil_mesh::{MeshError, Profile, Propeller, PropellerParams, VertexLayout};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = r#"foil-mesh

USAGE:
  foil-mesh <profile> [options]

OPTIONS:
  --foils <n>          Stations lofted after the base profile (default 10)
  --blades <n>         Blades around the hub (default 3)
  --hub-radius <r>     Hub radius (default 3)
  --hub-segments <n>   Angular samples around the hub (default 36)
  --out <path>         Write position/normal/color buffers as JSON
  -h, --help           Show this help
"#;

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run() {
        eprintln!("foil-mesh error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    profile: PathBuf,
    foil_count: Option<u32>,
    blade_count: Option<u32>,
    hub_radius: Option<f64>,
    hub_segments: Option<u32>,
    out: Option<PathBuf>,
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1))? else {
        print!("{USAGE}");
        return Ok(());
    };

    let defaults = GlobalConfig::default();
    let config = GlobalConfig::new(
        defaults.tolerance,
        options.foil_count.unwrap_or(defaults.foil_count),
        options.hub_segments.unwrap_or(defaults.hub_segments),
        options.blade_count.unwrap_or(defaults.blade_count),
    )
    .map_err(MeshError::from)
    .map_err(|e| e.to_string())?;

    let mut params = PropellerParams::from_config(&config);
    if let Some(radius) = options.hub_radius {
        params.hub.radius = radius;
    }

    let profile = Profile::load(&options.profile).map_err(|e| e.to_string())?;
    tracing::debug!(closed = profile.is_closed(config.tolerance), "Profile outline");
    let propeller = Propeller::build(&profile, &params).map_err(|e| e.to_string())?;
    let mesh = propeller.assemble().map_err(|e| e.to_string())?;
    let buffers = mesh.to_buffers(VertexLayout::PositionNormalColor);

    tracing::info!(
        vertices = buffers.vertex_count(),
        triangles = buffers.triangle_count(),
        stride_bytes = buffers.stride_bytes(),
        "Assembled propeller"
    );

    match options.out {
        Some(path) => {
            let json = serde_json::to_string(&buffers)
                .map_err(|e| format!("failed to serialize buffers: {e}"))?;
            fs::write(&path, json)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            let (min, max) = mesh.bounding_box();
            println!("Profile points: {}", profile.len());
            println!("Vertices:       {}", buffers.vertex_count());
            println!("Triangles:      {}", buffers.triangle_count());
            println!("Bounds:         {min} .. {max}");
        }
    }

    Ok(())
}

/// Returns `None` when help was requested.
fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<Options>, String> {
    let mut args = args;
    let mut profile = None;
    let mut options = Options {
        profile: PathBuf::new(),
        foil_count: None,
        blade_count: None,
        hub_radius: None,
        hub_segments: None,
        out: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--foils" => options.foil_count = Some(parse_value(&arg, args.next())?),
            "--blades" => options.blade_count = Some(parse_value(&arg, args.next())?),
            "--hub-radius" => options.hub_radius = Some(parse_value(&arg, args.next())?),
            "--hub-segments" => options.hub_segments = Some(parse_value(&arg, args.next())?),
            "--out" => options.out = Some(PathBuf::from(value(&arg, args.next())?)),
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            path if profile.is_none() => profile = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument {extra}")),
        }
    }

    options.profile = profile.ok_or_else(|| format!("missing profile path\n\n{USAGE}"))?;
    Ok(Some(options))
}

fn value(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_value<T: std::str::FromStr>(flag: &str, raw: Option<String>) -> Result<T, String> {
    let raw = value(flag, raw)?;
    raw.parse()
        .map_err(|_| format!("invalid value for {flag}: {raw}"))
}
