use std::time::Duration;

use agent_tools::{default_registry, RegistryToolExecutor, ToolPolicy};
use brain_core::{hash_prompt, ToolExecutor, ToolRequest};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "agent_tools=info,chart_engine=info";

#[derive(Debug, Parser)]
#[command(name = "tool-runner")]
#[command(about = "List, describe and invoke the charting agent's tools")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List registered tools with their descriptions
    List,

    /// Print the tool definitions sent to the model, as JSON
    Definitions,

    /// Print the generated system prompt
    Prompt {
        /// Print only the prompt's SHA-256 fingerprint
        #[arg(long)]
        hash: bool,
    },

    /// Invoke one tool
    Call {
        /// Tool name, e.g. generate_chart_data
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,

        /// Restrict execution to these tools (repeatable)
        #[arg(long)]
        allow: Vec<String>,

        /// Execution timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Wrap the result as {"tool", "success", "content"}
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let registry = default_registry();

    match args.command {
        Command::List => {
            for (name, description) in registry.get_descriptions() {
                println!("{:<32} {}", name, description);
            }
        }
        Command::Definitions => {
            println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
        }
        Command::Prompt { hash } => {
            let prompt = registry.system_prompt();
            if hash {
                println!("{}", hash_prompt(&prompt));
            } else {
                println!("{}", prompt);
            }
        }
        Command::Call {
            tool,
            args,
            allow,
            timeout_secs,
            json,
        } => {
            let mut policy = ToolPolicy::default().with_json_results(json);
            if !allow.is_empty() {
                policy = policy.allow_tools(allow);
            }
            if let Some(secs) = timeout_secs {
                policy = policy.with_timeout(Duration::from_secs(secs));
            }

            let executor = RegistryToolExecutor::with_policy(registry, policy);
            let request = ToolRequest::from_call("cli", tool, &args)?;
            info!("Calling tool '{}'", request.name);

            let result = executor.execute(request).await;
            println!("{}", result.content);
            if !result.success {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
