// Rust guideline compliant 2026-10-18

//! PetLar CLI Application
//!
//! Command-line interface for browsing PetLar reservations and the
//! reservation display helpers.

use anyhow::Result;
use clap::Parser;
use petlar_app::{AppContext, AppError, BookingRequest, ErrorEnvelope};
use petlar_cli::{commands, create_formatter, init_tracing, should_use_color, terminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "petlar",
    version,
    about = "PetLar: pet-sitting reservations from the terminal",
    long_about = "PetLar reads reservation, pet and host records exported from the PetLar backend and renders them with localized labels, colors, dates and prices.",
    after_help = "Examples:\n  petlar statuses\n  petlar list --status pending --sort total_price\n  petlar show res-1\n  petlar days 2024-03-10 2024-03-12\n  petlar format-price 1234.5\n  petlar quote --tutor u-1 --host h-1 --start 2024-03-10 --end 2024-03-12 --pet p-1,p-2\n"
)]
struct Cli {
    /// Data directory holding the record files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Show every reservation status with its label and colors
    Statuses,

    /// List reservations
    List {
        /// Filter by status (a status literal or "all")
        #[arg(long)]
        status: Option<String>,

        /// Filter by tutor id
        #[arg(long)]
        tutor: Option<String>,

        /// Filter by host id
        #[arg(long)]
        host: Option<String>,

        /// Sort by field (id, start_date, end_date, status, days, total_price, host)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show details of a reservation
    Show {
        /// Reservation ID
        id: String,
    },

    /// Count reservations per status
    Summary,

    /// Count the days between two dates
    Days {
        /// Start date
        start: String,

        /// End date
        end: String,
    },

    /// Format a date as dd/mm/yyyy
    FormatDate {
        /// Date string
        value: String,
    },

    /// Format an amount as Brazilian currency
    FormatPrice {
        /// Amount in reais
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Prepare a reservation request without submitting it
    Quote {
        /// Tutor id
        #[arg(long)]
        tutor: String,

        /// Host id
        #[arg(long)]
        host: String,

        /// Start date
        #[arg(long)]
        start: String,

        /// End date
        #[arg(long)]
        end: String,

        /// Pet ids
        #[arg(long = "pet", value_delimiter = ',', required = true)]
        pets: Vec<String>,
    },
}

impl Commands {
    fn needs_data(&self) -> bool {
        matches!(
            self,
            Commands::List { .. } | Commands::Show { .. } | Commands::Summary | Commands::Quote { .. }
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return ExitCode::SUCCESS;
    };

    // Only the config is read here; the context is built once logging is up.
    let resolved = if command.needs_data() {
        Some(AppContext::resolve(cli.data_dir.as_deref()))
    } else {
        None
    };
    let config = resolved
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .map(|(_, config)| config.clone());

    // Determine output format and color usage
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if cli.json => "json",
        None => match config.as_ref().map(|config| config.output_format) {
            Some(petlar_core::OutputFormat::Json) => "json",
            Some(petlar_core::OutputFormat::Plain) => "plain",
            _ => "table",
        },
    };
    let formatter = create_formatter(format, use_color);

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|config| config.log_level.clone()))
        .unwrap_or_else(|| "warn".to_string());

    let result = init_tracing(&log_level, cli.log_file.as_deref()).and_then(|guard| {
        let context = resolved
            .map(|result| {
                result.map(|(data_dir, config)| AppContext::with_config(data_dir, config))
            })
            .transpose();
        let outcome = run(command, context, formatter.as_ref());
        drop(guard);
        outcome
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if format == "json" {
                report_json_error(&err);
            } else {
                terminal::print_error(&format!("{:#}", err));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Commands,
    context: petlar_app::Result<Option<AppContext>>,
    formatter: &dyn petlar_cli::OutputFormatter,
) -> Result<()> {
    match command {
        Commands::Statuses => commands::statuses::execute(formatter),
        Commands::Days { start, end } => commands::helpers::days(&start, &end, formatter),
        Commands::FormatDate { value } => commands::helpers::format_date_value(&value, formatter),
        Commands::FormatPrice { amount } => commands::helpers::format_price(amount, formatter),
        data_command => {
            let Some(mut context) = context? else {
                anyhow::bail!("No data directory resolved");
            };
            match data_command {
                Commands::List {
                    status,
                    tutor,
                    host,
                    sort,
                } => commands::list::execute(&mut context, status, tutor, host, sort, formatter)?,
                Commands::Show { id } => commands::show::execute(&context, &id, formatter)?,
                Commands::Summary => commands::summary::execute(&context, formatter)?,
                Commands::Quote {
                    tutor,
                    host,
                    start,
                    end,
                    pets,
                } => {
                    let request = BookingRequest {
                        tutor_id: tutor,
                        host_id: host,
                        start_date: start,
                        end_date: end,
                        pet_ids: pets,
                    };
                    commands::quote::execute(&context, request, formatter)?;
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn report_json_error(err: &anyhow::Error) {
    let envelope = match err.downcast_ref::<AppError>() {
        Some(app_err) => serde_json::to_value(ErrorEnvelope::from_error(app_err)),
        None => Ok(serde_json::json!({
            "status": "error",
            "message": format!("{:#}", err),
        })),
    };
    match envelope.and_then(|value| serde_json::to_string_pretty(&value)) {
        Ok(body) => println!("{}", body),
        Err(_) => terminal::print_error(&format!("{:#}", err)),
    }
}
