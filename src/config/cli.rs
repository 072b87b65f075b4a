use crate::config::toml_config::TomlConfig;
use crate::core::call::{Call, Operation, Receiver};
use crate::core::engine::{ArithmeticMode, CallEngine, EquivalenceReport};
use crate::core::foo::Foo;
use crate::core::render::{render_equivalence, render_outcomes, OutputFormat};
use crate::domain::model::Bar;
use crate::utils::error::Result;
use crate::utils::validation::{validate_absent, validate_required_field, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bar-foo")]
#[command(about = "Run the Bar/Foo call fixture from the command line")]
pub struct CliConfig {
    /// Operation to call
    #[arg(long, value_enum)]
    pub op: Option<Operation>,

    /// Free function or Foo method
    #[arg(long, value_enum, default_value_t = Receiver::Foo)]
    pub receiver: Receiver,

    /// Bar.a for m1/m2
    #[arg(short, allow_negative_numbers = true)]
    pub a: Option<i32>,

    /// Bar.b for m1/m2
    #[arg(short, allow_negative_numbers = true)]
    pub b: Option<i32>,

    /// Scalar argument for m0
    #[arg(short, allow_negative_numbers = true)]
    pub x: Option<i32>,

    /// Overflow handling (overrides the config file)
    #[arg(long, value_enum)]
    pub mode: Option<ArithmeticMode>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Run every call listed in a TOML batch file
    #[arg(short, long, conflicts_with_all = ["op", "verify", "receiver", "a", "b", "x"])]
    pub config: Option<PathBuf>,

    /// Check that free functions and Foo methods agree on (a, b); always wraps
    #[arg(long, conflicts_with_all = ["op", "mode", "receiver", "x"])]
    pub verify: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// The single call described by `--op` and its operands.
    pub fn to_call(&self) -> Result<Call> {
        let op = *validate_required_field("command line", "op", &self.op)?;
        Call::from_parts(op, self.receiver, self.a, self.b, self.x)
    }

    /// The record `--verify` checks.
    pub fn equivalence_input(&self) -> Result<Bar> {
        let a = *validate_required_field("--verify", "a", &self.a)?;
        let b = *validate_required_field("--verify", "b", &self.b)?;
        Ok(Bar::new(a, b))
    }

    /// Command-line `--mode`/`--format` win over the batch file's `[settings]`.
    pub fn settings(&self, file: Option<&TomlConfig>) -> (ArithmeticMode, OutputFormat) {
        let mode = self
            .mode
            .unwrap_or_else(|| file.map(TomlConfig::mode).unwrap_or_default());
        let format = self
            .format
            .unwrap_or_else(|| file.map(TomlConfig::format).unwrap_or_default());
        (mode, format)
    }

    /// Runs the single call or the whole batch file and renders the outcomes.
    pub fn run(&self) -> Result<String> {
        let (calls, mode, format) = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading calls from: {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                let (mode, format) = self.settings(Some(&file));
                (file.to_calls()?, mode, format)
            }
            None => {
                let (mode, format) = self.settings(None);
                (vec![self.to_call()?], mode, format)
            }
        };

        let engine = CallEngine::new(Foo).with_mode(mode);
        let outcomes = engine.run_batch(&calls)?;
        render_outcomes(&outcomes, format)
    }

    /// Compares free functions and `Foo` methods on `(a, b)`.
    pub fn run_verify(&self) -> Result<(EquivalenceReport, String)> {
        let bar = self.equivalence_input()?;
        let report = CallEngine::new(Foo).check_equivalence(bar);
        let rendered = render_equivalence(&report, self.format.unwrap_or_default())?;
        Ok((report, rendered))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.config.is_some() {
            return Ok(());
        }
        if self.verify {
            validate_absent("--verify", "x", &self.x)?;
            return self.equivalence_input().map(|_| ());
        }
        self.to_call().map(|_| ())
    }
}
