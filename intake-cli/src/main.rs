use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use intake_catalog::{
    format_entry_literal, load_catalog_csv, merge_catalogs, parse_entry_literals, ratio_sum_warning,
};
use intake_core::{
    BodyProfile, EnergyBudget, FoodCatalog, FoodEntry, Goal, ParsedItem, analyze_items,
    parse_food_input, parse_food_input_strict,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod interactive;
mod render;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "intake",
    version = env!("INTAKE_LONG_VERSION"),
    about = "Daily nutrition intake and calorie target calculator"
)]
struct Cli {
    /// Extra CSV catalog merged over the builtin foods (repeatable)
    #[arg(long = "catalog", global = true)]
    catalogs: Vec<PathBuf>,

    /// Debug logging (overridden by INTAKE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Energy and macronutrient breakdown for a food list, e.g. "苹果200，煮鸡蛋100"
    Analyze {
        text: String,

        /// Reject items that are a bare number
        #[arg(long)]
        strict: bool,

        #[arg(long)]
        json: bool,
    },

    /// BMR, TDEE and daily target; remaining energy when --food is given
    Budget {
        #[arg(long)]
        age: u32,

        /// Body weight in kg
        #[arg(long)]
        weight: f64,

        /// Training days per week
        #[arg(long)]
        training_days: u32,

        /// maintain / lose / gain (维持 / 减重 / 增重); anything else means maintain
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Height in cm (default: config, then 168)
        #[arg(long)]
        height: Option<f64>,

        /// Food eaten so far today
        #[arg(long)]
        food: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Prompt for food, then for age/weight/training/goal
    Run,

    /// Inspect the catalog or prepare new entries
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    /// Manage ~/.intake/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List every food in the active catalog
    List {
        #[arg(long)]
        json: bool,
    },

    /// Print a catalog line to send to the maintainers
    Contribute {
        #[arg(long)]
        name: String,

        /// kcal per 100 g/ml
        #[arg(long)]
        energy: f64,

        #[arg(long)]
        carb: f64,

        #[arg(long)]
        protein: f64,

        #[arg(long)]
        fat: f64,
    },

    /// Validate a contribution snippet file (or a .csv catalog)
    Check { file: PathBuf },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },

        Command::Catalog {
            command:
                CatalogCommand::Contribute {
                    name,
                    energy,
                    carb,
                    protein,
                    fat,
                },
        } => {
            let entry = FoodEntry::new(name, energy, carb, protein, fat);
            if let Some(w) = ratio_sum_warning(&entry) {
                eprintln!("warning: {}", w);
            }
            println!("{}", format_entry_literal(&entry));
        }

        Command::Catalog {
            command: CatalogCommand::Check { file },
        } => check_snippet(&file)?,

        command => {
            let cfg = config::load_config()?;
            let catalog = active_catalog(&cfg, &cli.catalogs)?;
            run_with_catalog(command, &cfg, &catalog)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("INTAKE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builtin foods, then config files, then --catalog files.
fn active_catalog(cfg: &Config, extra: &[PathBuf]) -> Result<FoodCatalog> {
    let paths: Vec<&PathBuf> = cfg.catalog.extra_files.iter().chain(extra).collect();
    if paths.is_empty() {
        return Ok(FoodCatalog::builtin().clone());
    }
    let catalog = merge_catalogs(FoodCatalog::builtin(), &paths)?;
    tracing::debug!(foods = catalog.len(), files = paths.len(), "catalog ready");
    Ok(catalog)
}

fn run_with_catalog(command: Command, cfg: &Config, catalog: &FoodCatalog) -> Result<()> {
    let precision = cfg.display.precision;

    match command {
        Command::Analyze { text, strict, json } => {
            let items = parse_items(&text, strict)?;
            let report = analyze_items(&items, catalog);
            if json {
                let out = serde_json::json!({ "items": items, "nutrition": report });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render::render_analysis(&report, precision));
            }
        }

        Command::Budget {
            age,
            weight,
            training_days,
            goal,
            height,
            food,
            json,
        } => {
            let profile = BodyProfile::new(age, weight, training_days)
                .with_height(height.unwrap_or(cfg.body.height_cm));
            let goal = Goal::parse_lenient(&goal);

            let items = food.as_deref().map(parse_food_input).unwrap_or_default();
            let report = analyze_items(&items, catalog);
            let intake = (!items.is_empty()).then_some(&report.totals);
            let budget = EnergyBudget::compute(&profile, goal, intake)?;

            if json {
                let nutrition = intake.map(|_| &report);
                let out = serde_json::json!({ "budget": budget, "nutrition": nutrition });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                if intake.is_some() {
                    println!("{}", render::render_analysis(&report, precision));
                }
                print!("{}", render::render_budget(&budget, precision));
            }
        }

        Command::Run => {
            let session = interactive::Session {
                catalog,
                height_cm: cfg.body.height_cm,
                precision,
            };
            let stdin = std::io::stdin();
            interactive::run_session(&session, &mut stdin.lock(), &mut std::io::stdout())?;
        }

        Command::Catalog {
            command: CatalogCommand::List { json },
        } => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.entries())?);
            } else {
                print!("{}", render::render_catalog(catalog));
            }
        }

        Command::Catalog { .. } | Command::Config { .. } => {
            bail!("command does not use the catalog")
        }
    }

    Ok(())
}

fn parse_items(text: &str, strict: bool) -> Result<Vec<ParsedItem>> {
    if strict {
        Ok(parse_food_input_strict(text)?)
    } else {
        Ok(parse_food_input(text))
    }
}

fn check_snippet(file: &Path) -> Result<()> {
    let entries = if file.extension().is_some_and(|e| e == "csv") {
        load_catalog_csv(file)?
    } else {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("read {}", file.display()))?;
        parse_entry_literals(&text).with_context(|| format!("parsing {}", file.display()))?
    };

    let mut warnings = 0;
    for e in &entries {
        match ratio_sum_warning(e) {
            Some(w) => {
                warnings += 1;
                println!("! {}", w);
            }
            None => println!("ok {}", format_entry_literal(e)),
        }
    }
    println!("\n{} entries, {} with warnings", entries.len(), warnings);
    Ok(())
}
