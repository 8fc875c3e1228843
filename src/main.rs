use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value, json};
use std::io;

mod args;
mod mcp;
mod server;
mod taxonomy;
mod tools;

use mcp::contracts;

#[derive(Parser)]
#[command(name = "rhythmic-ribbon-mcp")]
#[command(
    version,
    about = "Ribbon dance movement vocabulary served as MCP tools"
)]
struct Cli {
    /// Log level for this crate when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct EnhancePromptArgs {
    /// Natural language description of the routine or concept
    #[arg(long)]
    description: String,
    /// Desired style; unknown styles fall back to classical
    #[arg(long)]
    style: Option<String>,
    /// Focus area, e.g. balanced or spatial_exploration
    #[arg(long)]
    focus: Option<String>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
    },
    /// Enhance a routine description with ribbon vocabulary
    EnhancePrompt(EnhancePromptArgs),
    /// Print the movement pattern taxonomy
    MovementVocabulary(OutputArgs),
    /// Print the spatial relationship taxonomy
    SpatialVocabulary(OutputArgs),
    /// Print the temporal dynamics taxonomy
    TemporalVocabulary(OutputArgs),
    /// Print the physical properties taxonomy
    PhysicalProperties(OutputArgs),
    /// Print compositional structure and rules
    CompositionGuide(OutputArgs),
    /// Print the style variations
    StyleVariations(OutputArgs),
    /// Print every layer of the taxonomy
    FullTaxonomy(OutputArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let (tool, args, output) = match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                let stdin = io::stdin();
                let stdout = io::stdout();
                return server::serve(stdin.lock(), io::BufWriter::new(stdout.lock()));
            }
            anyhow::bail!("only --stdio transport is supported")
        }
        Commands::EnhancePrompt(args) => {
            let mut map = Map::new();
            map.insert(
                contracts::ARG_ROUTINE_DESCRIPTION.to_string(),
                json!(args.description),
            );
            if let Some(style) = args.style {
                map.insert(contracts::ARG_STYLE_PREFERENCE.to_string(), json!(style));
            }
            if let Some(focus) = args.focus {
                map.insert(contracts::ARG_TECHNICAL_FOCUS.to_string(), json!(focus));
            }
            (contracts::TOOL_ENHANCE_PROMPT, Value::Object(map), args.output)
        }
        Commands::MovementVocabulary(output) => {
            (contracts::TOOL_MOVEMENT_VOCABULARY, Value::Null, output)
        }
        Commands::SpatialVocabulary(output) => {
            (contracts::TOOL_SPATIAL_VOCABULARY, Value::Null, output)
        }
        Commands::TemporalVocabulary(output) => {
            (contracts::TOOL_TEMPORAL_VOCABULARY, Value::Null, output)
        }
        Commands::PhysicalProperties(output) => {
            (contracts::TOOL_PHYSICAL_PROPERTIES, Value::Null, output)
        }
        Commands::CompositionGuide(output) => {
            (contracts::TOOL_COMPOSITION_GUIDE, Value::Null, output)
        }
        Commands::StyleVariations(output) => {
            (contracts::TOOL_STYLE_VARIATIONS, Value::Null, output)
        }
        Commands::FullTaxonomy(output) => (contracts::TOOL_FULL_TAXONOMY, Value::Null, output),
    };

    let result = server::call_tool(tool, &args);
    print_tool_result(result, output.json)
}

/// Logs go to stderr; stdout carries protocol frames.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rhythmic_ribbon_mcp={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

/// Prints the tool text, or the structured payload with `--json`.
/// Tool errors become the process error so the exit status is non-zero.
fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    if result["isError"].as_bool().unwrap_or(false) {
        let message = result
            .pointer("/structuredContent/error/message")
            .and_then(Value::as_str)
            .unwrap_or("tool error");
        anyhow::bail!("{message}");
    }

    if json_output {
        let structured = result.get("structuredContent").unwrap_or(&Value::Null);
        println!("{}", serde_json::to_string_pretty(structured)?);
    } else {
        let text = result
            .pointer("/content/0/text")
            .and_then(Value::as_str)
            .unwrap_or_default();
        println!("{text}");
    }
    Ok(())
}
