//! Project configuration.
//!
//! A build always operates on an explicit [`Project`]: the project root
//! directory plus the [`SiteConfig`] loaded from an optional `site.toml` at
//! that root. There is no hidden "current project" — every path the pipeline
//! touches is derived from the `Project` value handed to it.
//!
//! ## Project Layout
//!
//! The defaults reproduce the stock project layout:
//!
//! ```text
//! my-site/
//! ├── site.toml                 # Optional — defaults apply when absent
//! ├── articles.json             # Portfolio collection
//! ├── data/
//! │   ├── blog.json             # Blog collection
//! │   └── blog/markdown/        # Document files referenced by blog.json
//! ├── static/                   # Mirrored verbatim into the output tree
//! └── dist/                     # Output tree (created by the build)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Site"                # Site name, used in page <title> suffixes
//!
//! [paths]
//! portfolio = "articles.json"   # Portfolio collection file
//! blog = "data/blog.json"       # Blog collection file
//! static_dir = "static"         # Static asset directory
//! output = "dist"               # Output tree root
//!
//! [enrich]
//! enabled = true                # Fetch og:image covers for portfolio links
//! timeout_secs = 8              # Per-request timeout
//! user_agent = "Mozilla/5.0"    # Sent with every enrichment request
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have defaults matching the stock project layout. Unknown keys
/// are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site name, appended to page titles.
    pub title: String,
    /// Input/output locations, relative to the project root.
    pub paths: PathsConfig,
    /// Cover-image enrichment settings.
    pub enrich: EnrichConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Site".to_string(),
            paths: PathsConfig::default(),
            enrich: EnrichConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enrich.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "enrich.timeout_secs must be non-zero".into(),
            ));
        }
        for (key, value) in [
            ("paths.portfolio", &self.paths.portfolio),
            ("paths.blog", &self.paths.blog),
            ("paths.static_dir", &self.paths.static_dir),
            ("paths.output", &self.paths.output),
        ] {
            if value.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
            if value.is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "{key} must be relative to the project root"
                )));
            }
        }
        Ok(())
    }
}

/// Input/output locations, relative to the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Portfolio collection file (JSON array).
    pub portfolio: PathBuf,
    /// Blog collection file (JSON array referencing document files).
    pub blog: PathBuf,
    /// Static asset directory, mirrored into the output tree.
    pub static_dir: PathBuf,
    /// Output tree root.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            portfolio: PathBuf::from("articles.json"),
            blog: PathBuf::from("data/blog.json"),
            static_dir: PathBuf::from("static"),
            output: PathBuf::from("dist"),
        }
    }
}

/// Cover-image enrichment settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnrichConfig {
    /// When false, portfolio entries are published as-is, covers untouched.
    pub enabled: bool,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with enrichment requests. Many sites serve
    /// their social-preview tags only to browser-looking agents.
    pub user_agent: String,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: 8,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

/// A project: an explicit root directory plus its configuration.
///
/// All pipeline stages take a `&Project` and resolve paths through it.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: SiteConfig,
}

impl Project {
    /// Open a project at `root`, loading `site.toml` when present.
    pub fn open(root: &Path) -> Result<Self, ConfigError> {
        let config = load_config(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    pub fn portfolio_file(&self) -> PathBuf {
        self.root.join(&self.config.paths.portfolio)
    }

    pub fn blog_file(&self) -> PathBuf {
        self.root.join(&self.config.paths.blog)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.static_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.output)
    }

    /// Resolve a document path from a blog entry against the project root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

/// Load `site.toml` from `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("site.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml { path, source })?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}
