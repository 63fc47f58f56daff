use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use tag_policy::config::{DEFAULT_LOG_FILTER, LOG_ENV, PolicyConfig};
use tag_policy::policy::{PolicyMode, SemverPolicy};
use tag_policy::version::{find_lowest, find_newest, image_name_and_version, parse};

#[derive(Parser)]
#[command(name = "tag-policy")]
#[command(version, about = "Decide whether an image tag should be upgraded")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a version and print it as JSON
    Parse { version: String },
    /// Parse the tag of an image reference (name:tag)
    Image { reference: String },
    /// Print whether CURRENT should be upgraded to NEW
    Decide {
        #[arg(long, short)]
        policy: PolicyMode,
        current: String,
        new: String,
    },
    /// Print the newest tag greater than CURRENT, if any
    Newest {
        /// JSON policy config; its matchPreRelease setting is used
        #[arg(long)]
        config: Option<PathBuf>,
        /// Consider tags from every pre-release channel
        #[arg(long)]
        any_channel: bool,
        current: String,
        tags: Vec<String>,
    },
    /// Print the lowest stable tag
    Lowest { tags: Vec<String> },
}

fn init_logging(json: bool) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    match cli.command {
        Command::Parse { version } => {
            let parsed =
                parse(&version).with_context(|| format!("Failed to parse '{version}'"))?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Command::Image { reference } => {
            let (repository, version) = image_name_and_version(&reference)
                .with_context(|| format!("Failed to parse image reference '{reference}'"))?;
            let output = json!({ "repository": repository, "version": version });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Decide {
            policy,
            current,
            new,
        } => {
            let should_update = SemverPolicy::new(policy).should_update(&current, &new)?;
            println!("{should_update}");
        }
        Command::Newest {
            config,
            any_channel,
            current,
            tags,
        } => {
            let config = match config {
                Some(path) => PolicyConfig::load(&path)?,
                None => PolicyConfig::default(),
            };
            let match_pre_release = config.match_pre_release && !any_channel;
            if let Some(tag) = find_newest(&current, tags.as_slice(), match_pre_release)
                .with_context(|| format!("Failed to parse current version '{current}'"))?
            {
                println!("{tag}");
            }
        }
        Command::Lowest { tags } => {
            let lowest = find_lowest(tags.as_slice());
            if !lowest.is_empty() {
                println!("{lowest}");
            }
        }
    }

    Ok(())
}
