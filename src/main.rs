//! gardenctl CLI
//!
//! Entry point for the `gardenctl` command-line tool.

use clap::{Parser, Subcommand};
use gardenctl::config::GardenUpdate;
use gardenctl::{kubeconfig, metadata, paths, GardenRegistry, PatternKey};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "gardenctl")]
#[command(about = "Manage Garden clusters and resolve targets", version)]
struct Cli {
    /// Path to the gardenctl config file (default: $GCTL_HOME/gardenctl-v2.yaml or ~/.garden/gardenctl-v2.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Modify the gardenctl configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Print the garden name for a name or alias
    Resolve {
        name_or_alias: String,
    },

    /// Decompose a target string using the configured match patterns
    Match {
        value: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the configuration
    View {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Add the Garden cluster a kubeconfig points to
    AddGarden {
        /// Path to the kubeconfig of the Garden cluster
        kubeconfig: String,

        /// Name of the new garden. Must be unique. Defaults to the context name
        #[arg(long)]
        name: Option<String>,

        /// Use a specific context of the kubeconfig
        #[arg(long)]
        use_context: Option<String>,

        /// ConfigMap YAML file with the cluster's gardenctl settings
        #[arg(long)]
        cluster_config: Option<PathBuf>,
    },

    /// Modify or add a garden
    SetGarden {
        name: String,

        /// Path to the kubeconfig of the Garden cluster
        #[arg(long)]
        kubeconfig: Option<String>,

        /// Context of the kubeconfig to use
        #[arg(long)]
        context: Option<String>,

        /// Cluster identity of the Garden cluster
        #[arg(long)]
        identity: Option<String>,

        /// Alternative name for the garden (repeatable)
        #[arg(long)]
        aliases: Option<Vec<String>>,
    },
}

fn main() {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => match paths::default_config_path() {
            Ok(path) => path,
            Err(e) => fail(&format!("failed to locate config file: {}", e)),
        },
    };

    let result = match cli.command {
        Commands::Config { action } => match action {
            ConfigCommands::View { json } => run_view(&config_path, json),
            ConfigCommands::AddGarden {
                kubeconfig,
                name,
                use_context,
                cluster_config,
            } => run_add_garden(&config_path, &kubeconfig, name, use_context, cluster_config),
            ConfigCommands::SetGarden {
                name,
                kubeconfig,
                context,
                identity,
                aliases,
            } => run_set_garden(
                &config_path,
                &name,
                GardenUpdate {
                    kubeconfig,
                    context,
                    identity,
                    aliases,
                },
            ),
        },
        Commands::Resolve { name_or_alias } => run_resolve(&config_path, &name_or_alias),
        Commands::Match { value, json } => run_match(&config_path, &value, json),
    };

    if let Err(e) = result {
        fail(&e);
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn load_registry(config_path: &Path) -> Result<GardenRegistry, String> {
    GardenRegistry::load(config_path).map_err(|e| e.to_string())
}

fn run_view(config_path: &Path, json: bool) -> Result<(), String> {
    let registry = load_registry(config_path)?;
    let output = if json {
        serde_json::to_string_pretty(registry.config()).map_err(|e| e.to_string())?
    } else {
        serde_yaml::to_string(registry.config()).map_err(|e| e.to_string())?
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn run_add_garden(
    config_path: &Path,
    kubeconfig_arg: &str,
    name: Option<String>,
    use_context: Option<String>,
    cluster_config: Option<PathBuf>,
) -> Result<(), String> {
    let kubeconfig_arg = kubeconfig_arg.trim();
    if kubeconfig_arg.is_empty() {
        return Err("no kubeconfig path specified".to_string());
    }

    let kubeconfig_file = paths::expand_home(kubeconfig_arg)
        .map_err(|e| format!("failed to resolve ~ in kubeconfig path: {}", e))?;
    let context = kubeconfig::resolve_context(Path::new(&kubeconfig_file), use_context.as_deref())
        .map_err(|e| format!("failed to add garden: {}", e))?;

    let name = name.filter(|n| !n.is_empty()).unwrap_or_else(|| context.clone());

    let metadata = match cluster_config {
        Some(path) => metadata::load_metadata(&path).map_err(|e| e.to_string())?,
        None => BTreeMap::new(),
    };

    let mut registry = load_registry(config_path)?;
    // Only an explicitly requested context is stored; otherwise the
    // kubeconfig's current-context stays in charge.
    let stored_context = use_context.unwrap_or_default();
    registry
        .add_garden(&name, &kubeconfig_file, &stored_context, &metadata, config_path)
        .map_err(|e| e.to_string())?;

    tracing::info!(garden = %name, context = %context, "garden added");
    println!("Added garden {:?} to {}", name, config_path.display());
    Ok(())
}

fn run_set_garden(config_path: &Path, name: &str, mut update: GardenUpdate) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("garden name is required".to_string());
    }

    if let Some(kubeconfig) = update.kubeconfig.take() {
        let expanded = paths::expand_home(&kubeconfig)
            .map_err(|e| format!("failed to resolve ~ in kubeconfig path: {}", e))?;
        update.kubeconfig = Some(expanded);
    }

    let mut registry = load_registry(config_path)?;
    registry
        .set_garden(name, update, config_path)
        .map_err(|e| e.to_string())?;

    tracing::info!(garden = %name, "garden updated");
    println!("Configured garden {:?} in {}", name, config_path.display());
    Ok(())
}

fn run_resolve(config_path: &Path, name_or_alias: &str) -> Result<(), String> {
    let registry = load_registry(config_path)?;
    let name = registry.resolve_name(name_or_alias).map_err(|e| e.to_string())?;
    println!("{}", name);
    Ok(())
}

fn run_match(config_path: &Path, value: &str, json: bool) -> Result<(), String> {
    let registry = load_registry(config_path)?;
    let mut found = registry.config().match_pattern(value).map_err(|e| e.to_string())?;

    // A captured garden may be an alias
    if let Some(garden) = found.garden.take() {
        let name = registry.resolve_name(&garden).map_err(|e| e.to_string())?;
        found.garden = Some(name.to_string());
    }

    if json {
        let output = serde_json::to_string_pretty(&found).map_err(|e| e.to_string())?;
        println!("{}", output);
    } else {
        for key in PatternKey::ALL {
            if let Some(v) = found.get(key) {
                println!("{}: {}", key, v);
            }
        }
    }
    Ok(())
}
