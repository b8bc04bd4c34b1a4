use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use ppp_card::{CardConfig, Passcard};
use ppp_core::{Alphabet, PasscodeGenerator, SequenceKey};

mod settings;

use settings::{FileConfig, Overrides, Settings};

/// Generate Perfect Paper Passwords passcards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["key", "passphrase", "random_key"])
))]
struct Command {
    /// A 64-character hex sequence key
    #[arg(short = 'k', long = "key", env = "PPP_KEY", value_name = "KEY", hide_env_values = true)]
    key: Option<String>,

    /// Passphrase from which to derive the sequence key
    #[arg(
        short = 'p',
        long = "passphrase",
        env = "PPP_PASSPHRASE",
        value_name = "PHRASE",
        hide_env_values = true
    )]
    passphrase: Option<String>,

    /// Generate a new random sequence key and print it
    #[arg(long = "random-key")]
    random_key: bool,

    /// Generate NUM passcodes [default: 70]
    #[arg(short = 'n', long = "count", value_name = "NUM")]
    count: Option<u64>,

    /// Start at passcode N [default: 0]
    #[arg(short = 's', long = "start", value_name = "N")]
    start: Option<u128>,

    /// Display page P of NUM passcodes instead of giving a start index
    #[arg(long = "page", value_name = "P")]
    page: Option<u128>,

    /// Generate passcodes of length LEN [default: 4]
    #[arg(short = 'l', long = "length", value_name = "LEN")]
    length: Option<usize>,

    /// Characters to build passcodes from
    #[arg(short = 'c', long = "chars", value_name = "ARRAY")]
    chars: Option<String>,

    /// Passcodes per passcard row [default: 7]
    #[arg(long = "columns", value_name = "COLS")]
    columns: Option<usize>,

    /// JSON file with generator and card settings
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the key, alphabet, and passcode length
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Command {
    fn overrides(&self) -> Overrides {
        Overrides {
            count: self.count,
            start: self.start,
            page: self.page,
            length: self.length,
            chars: self.chars.clone(),
            columns: self.columns,
        }
    }

    fn sequence_key(&self) -> anyhow::Result<SequenceKey> {
        if let Some(key) = &self.key {
            return SequenceKey::from_hex(key).context("supplied key was not a valid 64 character hex key");
        }
        if let Some(passphrase) = &self.passphrase {
            return Ok(SequenceKey::from_passphrase(passphrase));
        }
        if self.random_key {
            return Ok(SequenceKey::random());
        }
        anyhow::bail!("specify one of --key, --passphrase or --random-key")
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build everything printed to stdout: the optional summary lines, then
/// either the single passcode or the passcard.
///
/// A key given with `-k` is echoed as typed.
fn render_output(
    cli: &Command,
    key: &SequenceKey,
    alphabet: &Alphabet,
    length: usize,
    codes: &[String],
    card: &CardConfig,
) -> anyhow::Result<String> {
    let mut out = String::new();
    if cli.verbose || cli.random_key {
        let shown = cli.key.clone().unwrap_or_else(|| key.to_hex());
        out.push_str(&format!("Sequence key: {shown}\n"));
    }
    if cli.verbose {
        out.push_str(&format!("Using alphabet: {alphabet}\n"));
        out.push_str(&format!("Passcode length: {length}\n"));
    }

    if let [code] = codes {
        out.push_str(code);
        out.push('\n');
    } else {
        let card = Passcard::new(codes, card).context("lay out passcard")?;
        out.push_str(&card.render());
    }
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let cli = Command::parse();
    init_tracing(cli.verbose);
    tracing::debug!("starting ppp");

    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(file, &cli.overrides())?;
    let key = cli.sequence_key()?;
    let alphabet = settings.generator.alphabet().context("invalid alphabet")?;

    let codes = PasscodeGenerator::new()
        .generate(
            &key,
            &alphabet,
            settings.start,
            settings.generator.count,
            settings.generator.length,
        )
        .context("generate passcodes")?;

    let out = render_output(
        &cli,
        &key,
        &alphabet,
        settings.generator.length,
        &codes,
        &settings.card,
    )?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
