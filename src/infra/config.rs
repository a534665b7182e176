use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cli::{AppContext, InitArgs};

/// Config file names probed in the working directory, first match wins
pub const CONFIG_FILES: [&str; 4] =
    ["dorkscript.toml", "dorkscript.yaml", "dorkscript.json", ".dorkscript.toml"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Seconds to wait between browser launches
    pub delay_secs: f64,

    /// Command used to open URLs (platform default when unset)
    pub browser: Option<String>,

    /// Queries longer than this are truncated in listings
    pub display_width: usize,

    /// Engine forced onto every query when `--engine` is not given
    pub default_engine: Option<String>,

    /// Variable defaults; CLI `NAME=value` wins over these
    pub variables: BTreeMap<String, String>,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            delay_secs: 0.5,
            browser: None,
            display_width: 55,
            default_engine: None,
            variables: BTreeMap::new(),
        }
    }
}

/// Prefix of environment overrides (`DORKSCRIPT_DELAY_SECS`, ...)
const ENV_PREFIX: &str = "DORKSCRIPT";

/// Environment keys that name a variable, e.g. `DORKSCRIPT_VARIABLES__TARGET`
const ENV_VARIABLES: &str = "DORKSCRIPT_VARIABLES__";

pub fn load_config() -> Result<Config>
{
    load_config_from(Path::new("."))
}

/// Like `load_config`, but a broken config file is logged and replaced by
/// the defaults
pub fn load_config_or_default() -> Config
{
    load_config().unwrap_or_else(|err| {
        warn!("{err:#}; using default configuration");
        Config::default()
    })
}

/// Load config from `dir`, then apply `DORKSCRIPT_*` environment overrides
pub fn load_config_from(dir: &Path) -> Result<Config>
{
    load_config_with_env(dir, std::env::vars().collect())
}

/// Load config from `dir` with `env` standing in for the process environment
pub fn load_config_with_env(
    dir: &Path,
    env: config::Map<String, String>,
) -> Result<Config>
{
    let mut builder = config::Config::builder();

    for name in &CONFIG_FILES
    {
        let path = dir.join(name);
        if path.exists()
        {
            builder = builder.add_source(config::File::from(path));
            break;
        }
    }

    // DORKSCRIPT_DELAY_SECS, DORKSCRIPT_VARIABLES__TARGET, ...
    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(Some(env.clone())),
    );

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let mut parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    restore_variable_case(&mut parsed.variables, &env);
    Ok(parsed)
}

/// The environment source lowercases keys; variable names are case-sensitive,
/// so re-key env-supplied variables under their exact spelling.
fn restore_variable_case(
    variables: &mut BTreeMap<String, String>,
    env: &config::Map<String, String>,
)
{
    for (key, value) in env
    {
        let Some(name) = key.strip_prefix(ENV_VARIABLES)
        else
        {
            continue;
        };
        if name.is_empty() || name.contains("__")
        {
            continue;
        }

        variables.remove(&name.to_lowercase());
        variables.insert(name.to_string(), value.clone());
    }
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join(CONFIG_FILES[0]);

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    if ctx.dry_run
    {
        if !ctx.quiet
        {
            println!("Would write {}:\n{toml_string}", config_path.display());
        }
        return Ok(());
    }

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
