use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cavegen::{CaveConfig, CaveGenerator, load_config_from_file};
use clap::{Parser, ValueEnum};
use tools::{logging, output};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a cellular-automaton cave map", long_about = None)]
struct Args {
    /// TOML file with generation parameters; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    /// Number of smoothing passes
    #[arg(short, long)]
    iterations: Option<u32>,
    /// Chance that a cell starts as wall, in [0, 1]
    #[arg(long)]
    wall_probability: Option<f64>,
    /// Wall-neighbor count at which a floor cell turns to wall
    #[arg(long)]
    birth: Option<u8>,
    /// Wall-neighbor count a wall cell needs to stay wall
    #[arg(long)]
    death: Option<u8>,
    /// Omit to draw a fresh seed; the seed used is always printed
    #[arg(short, long)]
    seed: Option<u64>,
    /// Treat off-map neighbors as absent instead of wall
    #[arg(long)]
    open_edges: bool,
    /// Leave disjoint caves unconnected
    #[arg(long)]
    no_connect: bool,
    #[arg(long)]
    min_cave_size: Option<usize>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
    /// Write the map here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn apply_overrides(&self, base: CaveConfig) -> CaveConfig {
        CaveConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            iterations: self.iterations.unwrap_or(base.iterations),
            initial_wall_probability: self
                .wall_probability
                .unwrap_or(base.initial_wall_probability),
            birth_threshold: self.birth.unwrap_or(base.birth_threshold),
            death_threshold: self.death.unwrap_or(base.death_threshold),
            seed: self.seed.or(base.seed),
            edge_is_wall: base.edge_is_wall && !self.open_edges,
            connect_caves: base.connect_caves && !self.no_connect,
            min_cave_size: self.min_cave_size.unwrap_or(base.min_cave_size),
            ..base
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => load_config_from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => CaveConfig::default(),
    };
    let config = args.apply_overrides(base);

    let generator = CaveGenerator::new(&config).context("Invalid generation parameters")?;
    let generated = generator.generate();

    let rendered = match args.format {
        OutputFormat::Ascii => output::render_ascii(&generated),
        OutputFormat::Json => {
            output::render_json(&generated).context("Failed to serialize cave as JSON")?
        }
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write map to {}", path.display()))?,
        None => print!("{rendered}"),
    }

    eprintln!("Seed: {}", generated.seed.value());
    eprintln!("Fingerprint: {:016x}", generated.fingerprint());
    if generated.regions.is_empty() {
        eprintln!("No floor survived; retry with another seed or a lower wall probability.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(parts: &[&str]) -> Args {
        Args::try_parse_from(parts).expect("arguments should parse")
    }

    #[test]
    fn flags_override_base_config() {
        let args = parse(&["cave", "--width", "20", "--seed", "4242", "--open-edges"]);
        let config = args.apply_overrides(CaveConfig::default());
        assert_eq!(config.width, 20);
        assert_eq!(config.height, CaveConfig::default().height);
        assert_eq!(config.seed, Some(4_242));
        assert!(!config.edge_is_wall);
        assert!(config.connect_caves);
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let base = CaveConfig { seed: Some(7), min_cave_size: 12, ..CaveConfig::default() };
        let config = parse(&["cave"]).apply_overrides(base.clone());
        assert_eq!(config, base);
    }

    #[test]
    fn no_connect_disables_corridors() {
        let config = parse(&["cave", "--no-connect"]).apply_overrides(CaveConfig::default());
        assert!(!config.connect_caves);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["cave", "--format", "png"]).is_err());
        assert_eq!(parse(&["cave", "-f", "json"]).format, OutputFormat::Json);
    }
}
