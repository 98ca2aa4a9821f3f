mod config;

use clap::{Parser, Subcommand};
use prompt_core::protocol::{FieldSpec, FormatMode, PromptResult, Selection};
use prompt_core::{Catalog, PromptSession, RandomDraw};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prompt_cli", about = "Compose image-generation prompts from a themed catalog")]
struct Args {
    /// JSON catalog to use instead of the built-in one (env: PROMPT_CATALOG).
    #[arg(long, value_name = "PATH", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List context keys.
    Contexts,

    /// Show the options of one field, or of every field, for a context.
    Options {
        #[arg(long)]
        context: String,

        #[arg(long)]
        field: Option<FieldSpec>,
    },

    /// Build a prompt from explicit selections.
    Compose {
        #[arg(long)]
        subject: Option<String>,

        #[arg(long, default_value = "scifi")]
        context: String,

        /// Catalog value for a field, e.g. `--pick style=Cyberpunk`.
        #[arg(long = "pick", value_name = "FIELD=VALUE", value_parser = config::parse_assignment)]
        picks: Vec<(FieldSpec, String)>,

        /// Free text for a field, e.g. `--custom lighting="candle glow"`.
        #[arg(long = "custom", value_name = "FIELD=TEXT", value_parser = config::parse_assignment)]
        customs: Vec<(FieldSpec, String)>,

        /// standard | natural (env: PROMPT_FORMAT).
        #[arg(long)]
        format: Option<FormatMode>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Pick a random context, subject and value for every field.
    Randomize {
        /// Seed for a reproducible draw.
        #[arg(long)]
        seed: Option<u64>,

        /// Replace the suggested subject after randomizing.
        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        format: Option<FormatMode>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the default negative prompt.
    Negative,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let catalog_path = config::catalog_path(args.catalog);
    let catalog = config::load_catalog(catalog_path.as_deref())?;

    match args.command {
        Command::Contexts => {
            for key in catalog.contexts() {
                println!("{key}");
            }
        }
        Command::Options { context, field } => print_options(&catalog, &context, field)?,
        Command::Compose {
            subject,
            context,
            picks,
            customs,
            format,
            json,
        } => {
            let mut session = PromptSession::new(&catalog, &context)?;
            session.set_subject(subject.unwrap_or_default());
            session.set_format(config::format_mode(format));
            for (field, value) in picks {
                session.select(field, Selection::Catalog(value))?;
            }
            for (field, text) in customs {
                session.select(field, Selection::Custom(text))?;
            }

            let result = session.generate()?;
            print_result(&session, None, &result, json)?;
        }
        Command::Randomize {
            seed,
            subject,
            format,
            json,
        } => {
            let mut session = PromptSession::new(&catalog, first_context(&catalog)?)?;
            session.set_format(config::format_mode(format));

            let draw = match seed {
                Some(seed) => session.randomize(&mut StdRng::seed_from_u64(seed))?,
                None => session.randomize(&mut rand::thread_rng())?,
            };
            tracing::debug!(context = %draw.context, "randomized");
            if let Some(s) = subject {
                session.set_subject(s);
            }

            let result = session.generate()?;
            print_result(&session, Some(&draw), &result, json)?;
        }
        Command::Negative => println!("{}", catalog.default_negative_prompt()),
    }

    Ok(())
}

fn first_context(catalog: &Catalog) -> anyhow::Result<&str> {
    catalog
        .contexts()
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("catalog has no contexts"))
}

fn print_options(catalog: &Catalog, context: &str, field: Option<FieldSpec>) -> anyhow::Result<()> {
    let fields: Vec<FieldSpec> = match field {
        Some(f) => vec![f],
        None => FieldSpec::ALL.to_vec(),
    };

    for f in fields {
        println!("[{}]", f.label());
        for option in catalog.selectable_options(context, f)? {
            println!("  {option}");
        }
    }

    let subjects = catalog.subjects_for(context)?;
    if field.is_none() && !subjects.is_empty() {
        println!("[Subjects]");
        for s in subjects {
            println!("  {s}");
        }
    }
    Ok(())
}

fn print_result(
    session: &PromptSession<'_>,
    draw: Option<&RandomDraw>,
    result: &PromptResult,
    as_json: bool,
) -> anyhow::Result<()> {
    if as_json {
        let out = json!({
            "request": session.request(),
            "draw": draw,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if draw.is_some() {
        eprintln!("context: {}", session.context());
        for (field, selection) in session.selections().iter() {
            if let Selection::Catalog(v) | Selection::Custom(v) = selection {
                eprintln!("  {:<9} {v}", field.as_str());
            }
        }
    }
    println!("positive:\n{}\n", result.positive);
    println!("negative:\n{}", result.negative);
    Ok(())
}
