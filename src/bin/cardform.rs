//! CLI tool for the payment form engine.
//!
//! # Usage
//!
//! ```bash
//! # Fill every field, submit, and print the result
//! cardform check --name "John Smith" --number 4539148803436467 \
//!     --month 04 --year 25 --cvc 123
//!
//! # Same, reproducing the historical submit behaviour, as JSON
//! cardform check --policy legacy --output json --cvc 12 ...
//!
//! # Check a card number with the Luhn algorithm
//! cardform luhn 4539148803436467
//!
//! # Format a card number
//! cardform format 4539148803436467
//!
//! # Show what a field keeps of some typed text
//! cardform normalize name "J0hn Sm!th"
//! ```

use card_form::{format, luhn, CardForm, Field, FormConfig, FormView, Preview, SubmitPolicy};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Credit card payment form validation tool")]
struct Cli {
    /// Log engine events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill the form, submit it and report every field
    Check {
        /// Cardholder name
        #[arg(long, default_value = "")]
        name: String,

        /// Card number (spaces and dashes allowed)
        #[arg(long, default_value = "")]
        number: String,

        /// Expiry month
        #[arg(long, default_value = "")]
        month: String,

        /// Expiry year (two digits)
        #[arg(long, default_value = "")]
        year: String,

        /// Card verification code
        #[arg(long, default_value = "")]
        cvc: String,

        /// Submit policy (overrides the config file)
        #[arg(short, long)]
        policy: Option<PolicyArg>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check if a card number passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Format a card number in groups of four
    Format {
        /// Card number to format
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Normalize text the way a form field does
    Normalize {
        /// Field whose alphabet to apply
        field: FieldArg,

        /// Text as typed
        text: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Strict,
    Legacy,
}

impl From<PolicyArg> for SubmitPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => SubmitPolicy::Strict,
            PolicyArg::Legacy => SubmitPolicy::Legacy,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldArg {
    Name,
    Number,
    Month,
    Year,
    Cvc,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => Field::Name,
            FieldArg::Number => Field::CardNumber,
            FieldArg::Month => Field::Month,
            FieldArg::Year => Field::Year,
            FieldArg::Cvc => Field::Cvc,
        }
    }
}

#[derive(Serialize)]
struct FieldReport {
    field: Field,
    text: String,
    error: Option<String>,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    policy: SubmitPolicy,
    submitted: bool,
    view: FormView,
    fields: Vec<FieldReport>,
    preview: &'a Preview,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            name,
            number,
            month,
            year,
            cvc,
            policy,
            config,
            output,
        } => {
            let mut config = match config {
                Some(path) => match FormConfig::from_file(&path) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("Error: {}: {}", path.display(), e);
                        return ExitCode::from(2);
                    }
                },
                None => FormConfig::default(),
            };
            if let Some(policy) = policy {
                config.submit_policy = policy.into();
            }
            cmd_check(
                [
                    name.as_str(),
                    number.as_str(),
                    month.as_str(),
                    year.as_str(),
                    cvc.as_str(),
                ],
                config,
                output,
            )
        }
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Format {
            card_number,
            separator,
        } => {
            println!("{}", format::format_with_separator(&card_number, &separator));
            ExitCode::SUCCESS
        }
        Commands::Normalize { field, text } => {
            let mut form = CardForm::default();
            println!("{}", form.input(field.into(), &text).text);
            ExitCode::SUCCESS
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "card_form=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_check(values: [&str; 5], config: FormConfig, output: OutputFormat) -> ExitCode {
    let mut form = CardForm::new(config);
    for (field, value) in Field::ALL.into_iter().zip(values) {
        form.input(field, value);
    }
    let outcome = form.submit();

    let fields: Vec<FieldReport> = Field::ALL
        .into_iter()
        .map(|field| FieldReport {
            field,
            text: form.text(field).to_string(),
            error: form.status(field).message(),
        })
        .collect();

    match output {
        OutputFormat::Text => {
            for report in &fields {
                let label = report.field.label();
                match &report.error {
                    Some(message) => {
                        println!("{:<16} {:<22} error: {}", label, report.text, message)
                    }
                    None => println!("{:<16} {:<22} ok", label, report.text),
                }
            }
            let preview = form.preview();
            println!();
            println!(
                "Preview: {} | {} | {} | {}",
                preview.name, preview.card_number, preview.expiry, preview.cvc
            );
            println!(
                "Submitted: {}",
                if outcome.is_submitted() { "yes" } else { "no" }
            );
        }
        OutputFormat::Json => {
            let report = CheckReport {
                policy: form.config().submit_policy,
                submitted: outcome.is_submitted(),
                view: form.view(),
                fields,
                preview: form.preview(),
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(2);
                }
            }
        }
    }

    if outcome.is_submitted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    if luhn::passes_luhn(card_number) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}
