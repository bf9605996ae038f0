//! docscout binary: documentation discovery from the command line.

use anyhow::Context;
use docscout::cli::output::Output;
use docscout::cli::{Cli, Commands};
use docscout::{ScoutConfig, ToolRegistry};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let config = ScoutConfig::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let default_filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let out = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let registry = ToolRegistry::with_default_tools(&config);

    match cli.command {
        Commands::Lookup {
            library,
            question,
            json: raw_json,
        } => {
            let args = match question {
                Some(q) => json!({"library": library, "question": q}),
                None => json!({"library": library}),
            };
            let result = registry
                .execute("find-llms-txt", args)
                .await
                .context("documentation lookup failed")?;

            if raw_json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            if result["found"].as_bool().unwrap_or(false) {
                out.success(result["message"].as_str().unwrap_or_default());
                if let Some(url) = result["url"].as_str() {
                    out.field("url", url);
                }
                if let Some(file_type) = result["fileType"].as_str() {
                    out.field("type", file_type);
                }
                if let Some(answer) = result["answer"].as_str() {
                    out.field("answer", answer);
                }
            } else {
                out.warning(result["message"].as_str().unwrap_or_default());
            }
        }
        Commands::Tools => {
            for def in registry.definitions() {
                out.info(&format!("{} - {}", def.name, def.description));
                out.field("input", &def.parameters.to_string());
                out.field("output", &def.output.to_string());
            }
        }
    }

    Ok(())
}
