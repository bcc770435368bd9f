//! Configuration management for the SRT linter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (explicit, project-local or user-global)
//! - Extension filtering used when walking directories

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".srt-lint.toml";

/// Extensions linted when nothing else is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["srt"];

/// Command-line arguments for the SRT linter
#[derive(Debug, Parser)]
#[command(name = "srt")]
#[command(about = "Lint SubRip (.srt) subtitle files")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Explicit config file, overrides project and user config
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Extensions to lint when walking directories
    #[arg(
        long = "ext",
        global = true,
        help = "File extension to lint inside directories (repeatable)"
    )]
    pub extensions: Vec<String>,

    /// Log level
    #[arg(
        long,
        global = true,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Lint the given files, or the files within the given directories
    Lint {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Run the language server over stdin/stdout
    Serve,
}

/// Contents of a config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub extensions: Option<Vec<String>>,
    pub follow_links: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Lowercase extensions without leading dot; empty means every file
    pub extensions: Vec<String>,
    /// Follow symbolic links when walking directories
    pub follow_links: bool,
    /// Log level
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            follow_links: false,
            log_level: "info".to_string(),
            config_file: None,
        }
    }
}

impl Config {
    /// Create configuration from parsed arguments, the working directory and
    /// the user config directory
    pub fn from_args(args: &Args) -> Result<Self> {
        let cwd = std::env::current_dir().context("Cannot determine working directory")?;
        let user_dir = dirs::config_dir().map(|dir| dir.join("srt-lint"));
        Self::from_args_with_dirs(args, &cwd, user_dir.as_deref())
    }

    /// Create configuration with explicit lookup directories (useful for testing)
    pub fn from_args_with_dirs(
        args: &Args,
        project_dir: &Path,
        user_dir: Option<&Path>,
    ) -> Result<Self> {
        let mut config = Config {
            log_level: args.log_level.clone(),
            ..Config::default()
        };

        if let Some(path) = locate_config_file(args.config.as_deref(), project_dir, user_dir)? {
            log::debug!("Loading config from {}", path.display());
            let file = FileConfig::load(&path)?;
            config.apply(file);
            config.config_file = Some(path);
        }

        if !args.extensions.is_empty() {
            config.extensions = normalize_extensions(&args.extensions);
        }

        Ok(config)
    }

    fn apply(&mut self, file: FileConfig) {
        if let Some(extensions) = file.extensions {
            self.extensions = normalize_extensions(&extensions);
        }
        if let Some(follow_links) = file.follow_links {
            self.follow_links = follow_links;
        }
    }

    /// Whether a file found while walking a directory should be linted
    pub fn matches_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }
}

/// Explicit path first (must exist), then project-local, then user-global
fn locate_config_file(
    explicit: Option<&Path>,
    project_dir: &Path,
    user_dir: Option<&Path>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let project = project_dir.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Ok(Some(project));
    }

    Ok(user_dir
        .map(|dir| dir.join("config.toml"))
        .filter(|path| path.is_file()))
}

fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}
