use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sketchkit::config::{Config, GeometryPolicy};
use sketchkit::device::{self, PointerCapabilities};
use sketchkit::draw::{ArrowStyle, Canvas, Color, RecordingSurface, arrowhead_wing_tips};
use sketchkit::registry::{self, CanvasSize};
use sketchkit::util::Point;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchkit")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHKIT_GIT_HASH"), ")"),
    about = "Drawing tool registry and arrow renderer"
)]
struct Cli {
    /// Config file to use instead of ~/.config/sketchkit/config.toml
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List drawing tools with their keyboard shortcuts
    Tools,
    /// Show the stroke palette (first entry is the default color)
    Palette,
    /// Render an arrow to a PNG file and/or print its stroke trace as JSON
    Arrow(ArrowArgs),
    /// Report whether drawing tools are available on this device
    Device,
}

#[derive(Args, Debug)]
struct ArrowArgs {
    /// Shaft start point
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    from: Point,

    /// Shaft end point (the arrowhead is drawn here)
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    to: Point,

    /// Stroke color as #RRGGBB (defaults to the configured stroke color)
    #[arg(long, value_name = "HEX")]
    color: Option<Color>,

    /// Stroke width (defaults to the configured stroke width)
    #[arg(long, value_name = "WIDTH")]
    thickness: Option<f64>,

    /// Write the arrow to a PNG file sized from the configured canvas
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Background color for the PNG (transparent when omitted)
    #[arg(long, value_name = "HEX", requires = "output")]
    background: Option<Color>,

    /// Print the stroked segments as JSON (implied when no output file is given)
    #[arg(long)]
    trace: bool,

    /// Reject non-finite or zero-length arrows regardless of the config file
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        print_usage();
        return Ok(());
    };

    match command {
        Command::Tools => {
            for (shortcut, tool) in registry::shortcuts().entries() {
                println!("{shortcut}  {tool}");
            }
        }
        Command::Palette => {
            for (index, color) in registry::palette().iter().enumerate() {
                let marker = if index == 0 { "  (default)" } else { "" };
                println!("{index}  {color}{marker}");
            }
            println!("highlight  {}", registry::STYLE_DEFAULTS.highlight_color);
        }
        Command::Arrow(args) => {
            let config = load_config(cli.config)?;
            run_arrow(&config, args)?;
        }
        Command::Device => {
            let caps = PointerCapabilities::from_env();
            if device::is_unsupported_device(&caps) {
                println!("touch-only device: drawing tools are disabled");
            } else {
                println!("pointer device: all tools available");
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    }
}

fn run_arrow(config: &Config, args: ArrowArgs) -> Result<()> {
    let mut renderer = config.arrow_renderer();
    if args.strict {
        renderer.policy = GeometryPolicy::Strict;
    }

    let style = ArrowStyle {
        color: args.color,
        thickness: args.thickness,
    };

    let canvas_size = config.canvas_size();
    warn_if_outside(args.from, args.to, canvas_size);

    if let Some(output) = &args.output {
        let mut canvas = Canvas::new(canvas_size).context("Failed to create canvas")?;
        if let Some(background) = args.background {
            canvas.fill(background)?;
        }
        renderer.render(&mut canvas.context, args.from, args.to, &style)?;
        canvas
            .write_png(output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    if args.trace || args.output.is_none() {
        let mut recorder = RecordingSurface::new();
        renderer.render(&mut recorder, args.from, args.to, &style)?;
        println!("{}", serde_json::to_string_pretty(recorder.segments())?);
    }

    Ok(())
}

/// Logs a warning when any part of the arrow falls outside the canvas.
fn warn_if_outside(start: Point, end: Point, size: CanvasSize) {
    let [left, right] = arrowhead_wing_tips(start, end);
    let (width, height) = (f64::from(size.width), f64::from(size.height));
    let inside = |p: &Point| (0.0..=width).contains(&p.x) && (0.0..=height).contains(&p.y);
    if ![start, end, left, right].iter().all(inside) {
        log::warn!(
            "Arrow {} -> {} extends outside the {}x{} canvas",
            start,
            end,
            size.width,
            size.height
        );
    }
}

fn print_usage() {
    println!("sketchkit: drawing tool registry and arrow renderer");
    println!();
    println!("Usage:");
    println!("  sketchkit tools                          List tools and shortcuts");
    println!("  sketchkit palette                        Show the stroke palette");
    println!("  sketchkit arrow --from X,Y --to X,Y      Print the arrow's stroke trace");
    println!("  sketchkit arrow ... -o arrow.png         Render the arrow to a PNG");
    println!("  sketchkit device                         Check touch-only gating");
    println!("  sketchkit --help                         Show help");
    println!();
    println!("Configuration:");
    println!("  ~/.config/sketchkit/config.toml (override with --config PATH)");
}
