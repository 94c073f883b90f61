use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use stone::{
    Direction, FixedMetricsProvider, LayoutConfig, LayoutEngine, LayoutError, LayoutSnapshot,
    MetricsProvider, StoneError, load_config,
};

/// Lays out Japanese text and prints the positioned runs as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Text to lay out
    #[arg(required_unless_present = "file")]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// JSON layout configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use top-to-bottom, right-to-left columns
    #[arg(long)]
    vertical: bool,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<f32>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<f32>,

    /// Measure with the built-in width table instead of installed fonts
    #[arg(long)]
    fixed_metrics: bool,

    /// Extra directory to load fonts from
    #[arg(long)]
    font_dir: Option<PathBuf>,
}

impl Args {
    fn layout_config(&self) -> Result<LayoutConfig, StoneError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => LayoutConfig::default(),
        };
        if self.vertical {
            config.direction = Direction::TbRl;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.validate()?;
        Ok(config)
    }

    fn text(&self) -> Result<String, StoneError> {
        match (&self.text, &self.file) {
            (_, Some(path)) => Ok(fs::read_to_string(path)?),
            (Some(text), None) => Ok(text.clone()),
            (None, None) => Err(StoneError::Config("no text given".to_string())),
        }
    }
}

#[cfg(feature = "system-fonts")]
fn metrics_provider(args: &Args) -> Arc<dyn MetricsProvider> {
    if args.fixed_metrics {
        return Arc::new(FixedMetricsProvider::new());
    }
    let provider = stone::FontFileMetricsProvider::with_system_fonts();
    if let Some(dir) = &args.font_dir {
        provider.add_font_dir(dir);
    }
    Arc::new(provider)
}

#[cfg(not(feature = "system-fonts"))]
fn metrics_provider(args: &Args) -> Arc<dyn MetricsProvider> {
    if args.font_dir.is_some() {
        log::warn!("Built without system-fonts; --font-dir is ignored");
    }
    Arc::new(FixedMetricsProvider::new())
}

fn main() -> Result<(), StoneError> {
    env_logger::init();

    let args = Args::parse();
    let config = args.layout_config()?;
    let text = args.text()?;

    let mut engine = LayoutEngine::with_provider(&config, metrics_provider(&args))?;
    match engine.set_text(&text) {
        Ok(()) => {}
        Err(LayoutError::Metrics(e)) if !args.fixed_metrics => {
            log::warn!("{}; falling back to fixed metrics", e);
            engine = LayoutEngine::with_provider(&config, Arc::new(FixedMetricsProvider::new()))?;
            engine.set_text(&text)?;
        }
        Err(e) => return Err(e.into()),
    }

    let stats = engine.cache_stats();
    log::info!(
        "Laid out {} runs on {} lines; metrics cache: {} entries, {} hits, {} misses ({:.1}% hit rate)",
        engine.runs().len(),
        engine.context().line_count(),
        stats.size,
        stats.hit_count,
        stats.miss_count,
        stats.hit_rate * 100.0
    );

    let snapshot = LayoutSnapshot::capture(&engine);
    println!("{}", snapshot.to_json()?);
    Ok(())
}
