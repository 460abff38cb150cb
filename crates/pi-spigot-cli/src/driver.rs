use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Context;
use pi_spigot::{DecimalExpansion, PiSpigot};

use crate::config::Config;

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub digits: usize,
    pub bytes: usize,
    pub refinements: u64,
    pub elapsed: Duration,
}

/// Pulls `config.digits` digits from a fresh spigot and writes them to
/// `config.output` as `3.1415...`.
#[tracing::instrument(level = "info", skip(config), fields(digits = config.digits, output = %config.output.display()))]
pub fn run(config: &Config) -> anyhow::Result<Summary> {
    let expansion = DecimalExpansion::new(config.digits)?;
    let file = File::create(&config.output)
        .with_context(|| format!("failed to create {}", config.output.display()))?;

    let start = Instant::now();
    let mut spigot = PiSpigot::new();
    let bytes = expansion
        .write_to(&mut spigot, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    let elapsed = start.elapsed();

    let summary = Summary {
        digits: expansion.count(),
        bytes,
        refinements: spigot.refinements(),
        elapsed,
    };
    tracing::info!(
        bytes = summary.bytes,
        refinements = summary.refinements,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "wrote digits of pi"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(dir: &tempfile::TempDir, digits: usize) -> Config {
        Config {
            digits,
            output: dir.path().join("digits_of_pi.txt"),
        }
    }

    #[test]
    fn writes_rendered_digits_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, 25);

        let summary = run(&config).unwrap();

        assert_eq!(summary.digits, 25);
        assert_eq!(summary.bytes, 26);
        let text = fs::read_to_string(&config.output).unwrap();
        assert_eq!(text, "3.141592653589793238462643");
    }

    #[test]
    fn file_matches_library_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, 300);

        let summary = run(&config).unwrap();

        let text = fs::read_to_string(&config.output).unwrap();
        assert_eq!(text, pi_spigot::pi_digits(300).unwrap());
        assert_eq!(summary.bytes, text.len());
        assert!(summary.refinements > 0);
    }

    #[test]
    fn truncates_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, 3);
        fs::write(&config.output, "stale contents that are longer").unwrap();

        run(&config).unwrap();

        assert_eq!(fs::read_to_string(&config.output).unwrap(), "3.14");
    }

    #[test]
    fn reports_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            digits: 5,
            output: dir.path().join("missing").join("pi.txt"),
        };

        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("failed to create"));
    }
}
