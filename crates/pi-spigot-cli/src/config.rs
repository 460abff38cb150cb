use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

/// Runtime configuration for the `pi-digits` binary.
///
/// Values are parsed from CLI arguments or environment variables (a `.env`
/// file is honoured). The defaults reproduce the classic benchmark fixture:
/// ten thousand digits written to `digits_of_pi.txt`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pi-digits",
    version,
    about = "Writes the leading decimal digits of pi to a text file"
)]
pub struct CliArgs {
    /// Number of digits to produce, counting the leading `3`.
    ///
    /// The output holds one more byte than this for the decimal point.
    ///
    /// Environment variable: `PI_DIGITS`
    #[arg(short, long, env = "PI_DIGITS", default_value_t = 10_000)]
    pub digits: usize,

    /// File to write. Created if missing, truncated otherwise.
    ///
    /// Environment variable: `PI_OUTPUT`
    #[arg(short, long, env = "PI_OUTPUT", default_value = "digits_of_pi.txt")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub digits: usize,
    pub output: PathBuf,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.digits == 0 {
            bail!("PI_DIGITS must be greater than 0");
        }

        if args.output.as_os_str().is_empty() {
            bail!("PI_OUTPUT must not be empty");
        }

        Ok(Self {
            digits: args.digits,
            output: args.output,
        })
    }
}
