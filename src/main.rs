use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use leadscore::config;
use leadscore::crm::{self, CrmClient, CrmError};
use leadscore::form::{Answer, FormData};
use leadscore::output;
use leadscore::scoring;

// Exit codes
const EXIT_AUTH: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug, Clone)]
struct AnswerArgs {
    /// Is the customer paying more for electricity after going solar?
    #[arg(long, value_enum)]
    paying_more: Option<Answer>,

    /// Are the panels shaded during the day?
    #[arg(long, value_enum)]
    shade: Option<Answer>,

    /// Is the inverter mounted outside?
    #[arg(long, value_enum)]
    inverter_outside: Option<Answer>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a lead locally and print the breakdown (no network)
    Score {
        #[command(flatten)]
        answers: AnswerArgs,
    },
    /// Score a lead and submit it to the CRM as a tagged contact
    Submit {
        /// Contact email
        #[arg(long)]
        email: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact full name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        answers: AnswerArgs,
    },
    /// Validate the configuration file without submitting anything
    Check,
    /// Create a starter config file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "leadscore")]
#[command(about = "Solar lead scoring and CRM submission CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/leadscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn form_from_args(email: String, phone: String, full_name: String, answers: &AnswerArgs) -> FormData {
    FormData {
        email,
        phone,
        full_name,
        paying_more: answers.paying_more,
        shade: answers.shade,
        inverter_outside: answers.inverter_outside,
    }
}

fn print_errors(heading: &str, errors: &[String]) {
    eprintln!("{}", heading);
    for error in errors {
        eprintln!("  - {}", error);
    }
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let config_path = cli.config.clone().map(PathBuf::from);

    // Init runs before config load; there is nothing to load yet
    if matches!(cli.command, Commands::Init) {
        if let Err(e) = config::run_init(config_path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        return;
    }

    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!(
            "Scoring weights: paying_more={} shade={} inverter_outside={} threshold={}",
            config.scoring.paying_more_yes,
            config.scoring.shade_yes,
            config.scoring.inverter_outside_yes,
            config.scoring.threshold
        );
    }

    // Tag and custom-field config backs every command, so validate up front
    if let Err(errors) = scoring::validate_scoring(&config.tags, &config.custom_fields) {
        print_errors("Scoring config errors:", &errors);
        std::process::exit(EXIT_CONFIG);
    }

    match cli.command {
        Commands::Init => unreachable!("handled before config load"),

        Commands::Check => match crm::validate_crm_config(&config.crm) {
            Ok(()) => println!("Configuration OK"),
            Err(errors) => {
                print_errors("CRM config errors:", &errors);
                std::process::exit(EXIT_CONFIG);
            }
        },

        Commands::Score { answers } => {
            let form = form_from_args(String::new(), String::new(), String::new(), &answers);
            let score = scoring::calculate_score(&form, &config.scoring);
            let qualification = scoring::determine_qualification(score, &config.scoring);
            let tag = scoring::qualification_tag(qualification, &config.tags);
            let breakdown = scoring::score_breakdown(&form, &config.scoring);

            println!(
                "{}",
                output::format_breakdown(
                    &breakdown,
                    &config.scoring,
                    qualification,
                    tag,
                    output::should_use_colors()
                )
            );
        }

        Commands::Submit {
            email,
            phone,
            name,
            answers,
        } => {
            // Unconfigured credentials block the submission outright
            if let Err(errors) = crm::validate_crm_config(&config.crm) {
                print_errors("CRM config errors:", &errors);
                std::process::exit(EXIT_CONFIG);
            }

            let form = form_from_args(email, phone, name, &answers);
            let score = scoring::calculate_score(&form, &config.scoring);
            let qualification = scoring::determine_qualification(score, &config.scoring);
            let tag = scoring::qualification_tag(qualification, &config.tags);
            let breakdown = scoring::score_breakdown(&form, &config.scoring);

            println!(
                "{}",
                output::format_breakdown(
                    &breakdown,
                    &config.scoring,
                    qualification,
                    tag,
                    output::should_use_colors()
                )
            );

            if cli.verbose {
                eprintln!("Submitting to {}", config.crm.api_url);
            }

            let client = match CrmClient::new(config.crm.clone()) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to create CRM client: {}", e);
                    std::process::exit(EXIT_NETWORK);
                }
            };

            match client
                .submit_lead(&form, score, qualification, tag, &config.custom_fields)
                .await
            {
                Ok(response) => {
                    println!("Lead submitted: {}", response);
                }
                Err(e) => {
                    eprintln!("Submission failed: {}", e);
                    let code = match &e {
                        CrmError::Api { status, .. }
                            if status.as_u16() == 401 || status.as_u16() == 403 =>
                        {
                            EXIT_AUTH
                        }
                        _ => EXIT_NETWORK,
                    };
                    std::process::exit(code);
                }
            }
        }
    }
}
