//! sendgrid-tools: SendGrid v3 API as a tool server.
//!
//! Usage:
//!   sendgrid-tools serve                 Serve every tool over MCP (stdio)
//!   sendgrid-tools list [--filter TEXT]  List the tool catalog
//!   sendgrid-tools describe TOOL         Show a tool's parameters
//!   sendgrid-tools call TOOL --args JSON Invoke one tool and print the result
//!   sendgrid-tools setup                 Run the setup wizard

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use sendgrid_tools::config::{self, SendgridConfig};
use sendgrid_tools::mcp::McpServer;
use sendgrid_tools::sendgrid::SendgridClient;
use sendgrid_tools::tools::{catalog, Dispatcher, ToolRegistry};
use sendgrid_tools::types::{EndpointDescriptor, HttpMethod, ParamLocation};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "sendgrid-tools")]
#[command(version)]
#[command(about = "SendGrid v3 REST endpoints as named tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the sendgrid-tools home directory [default: ~/.sendgrid-tools].
    #[arg(long, global = true)]
    home: Option<String>,

    /// Log level (debug, info, warn, error). Overrides config.toml.
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve every tool to an MCP client over stdin/stdout.
    Serve,

    /// List the tool catalog.
    List {
        /// Only show tools whose name or path contains this text.
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show a tool's endpoint and parameters.
    Describe {
        /// Tool name, e.g. get_api_key.
        tool: String,
    },

    /// Invoke one tool and print the decoded response.
    Call {
        /// Tool name, e.g. list_bounces.
        tool: String,

        /// Tool arguments as a JSON object.
        #[arg(long, default_value = "{}")]
        args: String,
    },

    /// Run the first-time setup wizard.
    Setup,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let home_dir = match &cli.home {
        Some(home) => PathBuf::from(shellexpand::tilde(home).into_owned()),
        None => config::default_home_dir(),
    };
    let config_path = home_dir.join(config::CONFIG_FILE);
    let mut cfg = config::load_config(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    config::apply_env_overrides(&mut cfg);

    // Logs go to stderr; stdout carries the MCP stream.
    let level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve => {
            cmd_serve(&cfg).await?;
            // The blocking stdin reader may still be parked on a read.
            std::process::exit(0);
        }
        Commands::List { filter } => cmd_list(filter.as_deref()),
        Commands::Describe { tool } => cmd_describe(&tool),
        Commands::Call { tool, args } => cmd_call(&cfg, &tool, &args).await,
        Commands::Setup => cmd_setup(&home_dir),
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

async fn cmd_serve(cfg: &SendgridConfig) -> Result<()> {
    let dispatcher = bootstrap(cfg)?;
    let server = McpServer::new(ToolRegistry::from_catalog(dispatcher));

    let shutdown = shutdown_on_ctrl_c();
    server.serve_stdio(shutdown).await?;

    info!("MCP server stopped");
    Ok(())
}

fn cmd_list(filter: Option<&str>) -> Result<()> {
    let filter = filter.map(str::to_lowercase);
    let mut shown = 0;

    for descriptor in catalog::all() {
        if let Some(text) = &filter {
            if !descriptor.name.contains(text.as_str()) && !descriptor.path.contains(text.as_str())
            {
                continue;
            }
        }
        println!(
            "{:<44} {:<7} {}",
            descriptor.name.bold(),
            colorize_method(descriptor.method),
            descriptor.path.dimmed()
        );
        shown += 1;
    }

    println!();
    println!("{} of {} tools", shown, catalog::len());
    Ok(())
}

fn cmd_describe(name: &str) -> Result<()> {
    let descriptor = catalog::find(name)
        .with_context(|| format!("Unknown tool '{}'. Try `sendgrid-tools list`.", name))?;
    print_descriptor(descriptor);
    Ok(())
}

async fn cmd_call(cfg: &SendgridConfig, tool: &str, args: &str) -> Result<()> {
    let args: Value = serde_json::from_str(args).context("--args must be valid JSON")?;
    let dispatcher = bootstrap(cfg)?;

    let cancel = shutdown_on_ctrl_c();
    let output = dispatcher.invoke_with_cancel(tool, &args, &cancel).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to render response")?
    );
    Ok(())
}

fn cmd_setup(home_dir: &Path) -> Result<()> {
    sendgrid_tools::setup::run_setup_wizard(home_dir)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the dispatcher from a loaded config.
fn bootstrap(cfg: &SendgridConfig) -> Result<Dispatcher> {
    let client = SendgridClient::from_config(cfg).context("Failed to create SendGrid client")?;
    debug!("Using SendGrid API at {}", client.base_url());
    Ok(Dispatcher::new(client))
}

/// A token that fires on Ctrl+C.
fn shutdown_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n{} Shutting down...", "<<<".red().bold());
            signal_token.cancel();
        }
    });
    token
}

fn print_descriptor(descriptor: &EndpointDescriptor) {
    println!();
    println!("{}", descriptor.name.bold());
    println!("  {}", descriptor.description);
    println!();
    println!(
        "  {} {}",
        colorize_method(descriptor.method),
        descriptor.path
    );

    if descriptor.params.is_empty() {
        println!("\n  {}", "No parameters.".dimmed());
        println!();
        return;
    }

    println!();
    println!("  {}:", "Parameters".bold());
    for param in descriptor.params {
        let location = match param.location {
            ParamLocation::Path => "path",
            ParamLocation::Query => "query",
            ParamLocation::Body => "body",
        };
        let required = if param.required {
            "required".yellow().to_string()
        } else {
            "optional".dimmed().to_string()
        };
        println!(
            "    {:<28} {:<6} {:<8} {}  {}",
            param.name,
            location,
            param.kind.schema_type(),
            required,
            param.description
        );
    }
    println!();
}

fn colorize_method(method: HttpMethod) -> String {
    let label = method.to_string();
    match method {
        HttpMethod::Get => label.green().to_string(),
        HttpMethod::Post => label.cyan().to_string(),
        HttpMethod::Put | HttpMethod::Patch => label.yellow().to_string(),
        HttpMethod::Delete => label.red().to_string(),
    }
}
