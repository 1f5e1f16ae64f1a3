use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use string_bean::logging::{init_logging, LoggingConfig};
use string_bean::{
    grid_raytrace, CountTracker, LossTracker, PlannerConfig, ThreadPlanner, ThreadScene,
};
use string_bean_geom::{AnchorShape, Rect};

/// Turn an image into thread art and write it as SVG.
#[derive(Parser, Debug)]
#[command(name = "string-bean", version, about)]
struct CliArgs {
    /// Image to recreate (png, jpeg, webp)
    input_file: PathBuf,
    /// SVG file to write
    output_file: PathBuf,

    /// Number of chords to draw
    #[arg(short = 'c', long = "chords", default_value_t = 500)]
    num_chords: u32,
    /// Opacity of a single thread pass, in [0, 1]
    #[arg(short = 'o', long = "opacity", default_value_t = 0.2)]
    line_opacity: f64,
    /// Number of anchors on the frame
    #[arg(short = 'a', long = "anchors", default_value_t = 288)]
    num_anchors: usize,
    /// Anchors to skip on each side of the current one
    #[arg(short = 'g', long = "gap", default_value_t = 0)]
    num_anchor_gap: usize,
    /// Circle radius in input pixels (capped to fit the image)
    #[arg(short = 'r', long)]
    radius: Option<f64>,
    /// Weight for pixels a chord would over-darken
    #[arg(short = 'p', long, default_value_t = 5.0)]
    penalty: f64,
    /// Frame shape the anchors sit on
    #[arg(short = 's', long, value_enum, default_value_t = FrameShape::Circle)]
    shape: FrameShape,
    /// Anchor the thread starts from
    #[arg(long, default_value_t = 0)]
    start: usize,
    /// Stop once the remaining darkness drops below this, instead of after `--chords`
    #[arg(long)]
    target_loss: Option<f64>,
    /// Steps between loss evaluations when `--target-loss` is set
    #[arg(long, default_value_t = 200)]
    loss_wait: usize,

    /// SVG width
    #[arg(short = 'W', long = "width", default_value_t = 850)]
    output_width: u32,
    /// SVG height
    #[arg(short = 'H', long = "height", default_value_t = 850)]
    output_height: u32,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FrameShape {
    Circle,
    Rectangle,
}

impl CliArgs {
    fn anchor_shape(&self) -> AnchorShape {
        match self.shape {
            FrameShape::Circle => AnchorShape::Circle { radius: self.radius },
            FrameShape::Rectangle => AnchorShape::Rectangle,
        }
    }

    fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            line_weight: self.line_opacity,
            anchor_gap_count: self.num_anchor_gap,
            lightness_penalty: self.penalty,
        }
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_verbosity(args.verbose));

    let img = image::open(&args.input_file)
        .with_context(|| format!("failed to open image {}", args.input_file.display()))?
        .to_luma8();
    let (width, height) = (img.width() as usize, img.height() as usize);
    log::info!("loaded {}x{} image from {}", width, height, args.input_file.display());

    // anchors sit on pixel centres so every chord crosses the image
    let bounds = Rect::pixel_bounds(width, height);
    let shape = args.anchor_shape();
    let anchors = shape
        .anchors(args.num_anchors, bounds)
        .context("failed to place anchors on the input image")?;

    let image_mask = img.into_raw();
    let mut planner = ThreadPlanner::new(
        args.planner_config(),
        &anchors,
        grid_raytrace,
        width,
        height,
        &image_mask,
    )?;

    let moves = match args.target_loss {
        Some(target) => planner.get_moves(args.start, LossTracker::new(args.loss_wait, target)),
        None => planner.get_moves(args.start, CountTracker(args.num_chords)),
    }
    .context("thread planning failed")?;
    log::info!("planned {} chords", moves.len().saturating_sub(1));

    write_svg(&args, shape, bounds, &moves)?;
    log::info!("wrote {}", args.output_file.display());

    Ok(())
}

/// Lays the anchors out again at output size and writes the chords.
fn write_svg(args: &CliArgs, shape: AnchorShape, planned: Rect, moves: &[usize]) -> Result<()> {
    let (out_w, out_h) = (f64::from(args.output_width), f64::from(args.output_height));
    let canvas = Rect::from_size(out_w, out_h);

    let anchors = shape
        .rescaled(planned, canvas)
        .anchors(args.num_anchors, canvas)
        .context("failed to place anchors on the output canvas")?;
    let scene = ThreadScene::from_moves(out_w, out_h, args.line_opacity, &anchors, moves)?;

    let file = File::create(&args.output_file)
        .with_context(|| format!("failed to create {}", args.output_file.display()))?;
    scene.write_svg(BufWriter::new(file))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn defaults_match_planner_setup() {
        let args = CliArgs::try_parse_from(["string-bean", "in.png", "out.svg"]).unwrap();
        assert_eq!(args.num_chords, 500);
        assert_eq!(args.num_anchors, 288);
        assert_eq!(args.anchor_shape(), AnchorShape::Circle { radius: None });
        assert_eq!(args.planner_config(), PlannerConfig::default());
    }

    #[test]
    fn rectangle_shape_flag() {
        let argv = ["string-bean", "in.png", "out.svg", "-s", "rectangle", "-W", "400"];
        let args = CliArgs::try_parse_from(argv).unwrap();
        assert_eq!(args.anchor_shape(), AnchorShape::Rectangle);
        assert_eq!(args.output_width, 400);
    }

    #[test]
    fn verbosity_counts() {
        let args = CliArgs::try_parse_from(["string-bean", "in.png", "out.svg", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}
