//! Writes synthetic Public Suffix List files for benchmarking `pslint`.
//!
//! Usage: cargo run --release --bin generate-fixtures --features generate -- [OPTIONS] [OUTPUT_DIR]
//!
//! Every written file is linted with group order checking enabled first;
//! a fixture that does not come out clean is not written.

use clap::{Parser, ValueEnum};
use psl_lint_core::generate::{GeneratorConfig, generate};
use psl_lint_core::{GroupCheck, LintConfig, lint_str};
use std::{fs, io, path::Path, path::PathBuf, process::ExitCode};

/// Fixture sizes, matching the presets in benches/fixtures.rs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    Small,
    Medium,
    Large,
    Xlarge,
}

impl Preset {
    fn name(self) -> &'static str {
        match self {
            Preset::Small => "small",
            Preset::Medium => "medium",
            Preset::Large => "large",
            Preset::Xlarge => "xlarge",
        }
    }

    fn config(self) -> GeneratorConfig {
        match self {
            Preset::Small => GeneratorConfig::small(),
            Preset::Medium => GeneratorConfig::medium(),
            Preset::Large => GeneratorConfig::large(),
            Preset::Xlarge => GeneratorConfig::xlarge(),
        }
    }
}

/// Generate PSL fixtures.
#[derive(Parser, Debug)]
#[command(name = "generate-fixtures")]
struct Args {
    /// Directory the `<preset>.dat` files are written to.
    #[arg(default_value = "benches/fixtures")]
    output_dir: PathBuf,

    /// Presets to generate (all when omitted).
    #[arg(long, short = 'p', value_enum)]
    preset: Vec<Preset>,

    /// Seed overriding the presets' default.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let presets = if args.preset.is_empty() {
        Preset::value_variants().to_vec()
    } else {
        args.preset.clone()
    };

    if let Err(e) = run(&args.output_dir, &presets, args.seed) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(output_dir: &Path, presets: &[Preset], seed: Option<u64>) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;
    let lint_config = LintConfig::new().with_group_check(GroupCheck::OnBoundaries);

    for preset in presets {
        let mut config = preset.config();
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }

        let content = generate(&config);
        let report = lint_str(&content, &lint_config);
        if let Some(diagnostic) = report.diagnostics.first() {
            return Err(io::Error::other(format!(
                "{} fixture is not lint-clean: {}",
                preset.name(),
                diagnostic
            )));
        }

        let path = output_dir.join(format!("{}.dat", preset.name()));
        fs::write(&path, &content)?;
        println!(
            "{}: {} lines, {} ICANN and {} private groups (seed {})",
            path.display(),
            content.lines().count(),
            config.num_groups,
            config.num_private_groups,
            config.seed
        );
    }

    Ok(())
}
