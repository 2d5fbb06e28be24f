//! weft - lay out a JSON scene and print the resulting frames.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use weft::Node;
use weft::config::load_context;
use weft::layout::{Constraints, Density, LayoutContext, LayoutDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "weft", version, about = "Lay out a scene with two-phase custom layouts")]
struct Args {
    /// Scene file (JSON node tree)
    scene: PathBuf,

    /// Maximum width in pixels (unbounded if omitted; column scenes need it)
    #[arg(long)]
    width: Option<u32>,

    /// Maximum height in pixels (unbounded if omitted; column scenes need it)
    #[arg(long)]
    height: Option<u32>,

    #[arg(long, default_value_t = 0)]
    min_width: u32,

    #[arg(long, default_value_t = 0)]
    min_height: u32,

    /// Layout context file (density, direction)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pixels per dp, overrides the config file
    #[arg(long)]
    density: Option<f32>,

    /// Lay out right-to-left, overrides the config file
    #[arg(long)]
    rtl: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl Args {
    fn constraints(&self) -> Constraints {
        Constraints::new(
            self.min_width,
            self.width.unwrap_or(Constraints::INFINITY),
            self.min_height,
            self.height.unwrap_or(Constraints::INFINITY),
        )
    }

    fn context(&self) -> anyhow::Result<LayoutContext> {
        let mut context = match &self.config {
            Some(path) => load_context(path)?,
            None => LayoutContext::default(),
        };
        if let Some(density) = self.density {
            context = context.with_density(Density::new(density));
        }
        if self.rtl {
            context = context.with_direction(LayoutDirection::Rtl);
        }
        Ok(context)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let scene = Node::load(&args.scene)?;
    let context = args.context()?;
    let constraints = args.constraints();

    tracing::info!(scene = %args.scene.display(), ?constraints, ?context, "laying out scene");
    let frame = scene
        .layout(constraints, &context)
        .with_context(|| format!("failed to lay out {}", args.scene.display()))?;

    match args.format {
        Format::Text => print!("{frame}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&frame)?),
    }
    Ok(())
}
