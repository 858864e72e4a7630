//! `fisco` — check and generate Italian tax codes from the command line.
//!
//! # Usage
//!
//! ```
//! fisco check RSSMRA80A15H501I
//! fisco check RSSMRA80A15H501I --surname Rossi --name Mario --sex m \
//!   --born 1980-01-15 --place H501
//! fisco encode --surname Rossi --name Mario --sex m --born 1980-01-15 \
//!   --place H501
//! ```
//!
//! `check` exits 0 when the verdict is valid and 1 otherwise. Results go to
//! stdout; logging goes to stderr, filtered through the usual environment
//! variable.

use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fisco_core::{
  identity::{PlaceCode, ReferenceIdentity, Sex},
  verdict::Verdict,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "fisco", about = "Italian tax-code checker and generator")]
struct Cli {
  /// Print results as JSON instead of plain text.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Check a candidate code, optionally against personal data.
  Check {
    /// The 16-character candidate code.
    code: String,

    #[command(flatten)]
    identity: Option<IdentityArgs>,
  },

  /// Generate the code for the given personal data.
  Encode {
    #[command(flatten)]
    identity: IdentityArgs,
  },
}

/// The personal data a code is derived from. The five flags go together:
/// passing any of them requires all of them.
#[derive(Args)]
struct IdentityArgs {
  /// Surname as registered at birth.
  #[arg(long)]
  surname: String,

  /// Given name.
  #[arg(long)]
  name: String,

  /// Sex: m or f (male/female also accepted).
  #[arg(long)]
  sex: Sex,

  /// Birth date, YYYY-MM-DD.
  #[arg(long)]
  born: NaiveDate,

  /// Birthplace code: one letter and three digits, e.g. H501 for Rome.
  #[arg(long)]
  place: PlaceCode,
}

impl IdentityArgs {
  fn into_identity(self) -> ReferenceIdentity {
    ReferenceIdentity::new(
      self.surname,
      self.name,
      self.sex,
      self.born,
      self.place,
    )
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  match cli.command {
    Command::Check { code, identity } => {
      let reference = identity.map(IdentityArgs::into_identity);
      tracing::debug!(
        candidate = %code,
        strict = reference.is_some(),
        "checking candidate"
      );

      let verdict = fisco_cf::verify(&code, reference.as_ref());
      if cli.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
      } else {
        print_verdict(&code, &verdict);
      }
      Ok(if verdict.valid {
        ExitCode::SUCCESS
      } else {
        ExitCode::FAILURE
      })
    }

    Command::Encode { identity } => {
      let reference = identity.into_identity();
      let fields = fisco_cf::Fields::of_identity(&reference);
      tracing::debug!(
        surname = %fields.surname,
        given = %fields.name,
        "derived name fragments"
      );
      let code = fields.code();

      if cli.json {
        println!("{}", serde_json::json!({ "code": code }));
      } else {
        println!("{code}");
      }
      Ok(ExitCode::SUCCESS)
    }
  }
}

fn print_verdict(code: &str, verdict: &Verdict) {
  if verdict.valid {
    println!("{code}: valid");
    return;
  }
  match &verdict.reconstructed {
    None => println!("{code}: malformed (want 16 characters, fixed layout)"),
    Some(expected) => {
      println!("{code}: does not match the supplied data");
      println!("  expected {expected}");
      for d in &verdict.discrepancies {
        println!("  {d}");
      }
    }
  }
}
