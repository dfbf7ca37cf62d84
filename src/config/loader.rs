//! Loading a configuration document from text or from disk

use std::path::{Path, PathBuf};

use super::env;
use super::error::{ConfigError, Result};
use super::format::ConfigFormat;
use super::types::{PipelineConfig, ResolvedPaths};

impl PipelineConfig {
    /// Parse, expand `${VAR}` placeholders from the process environment and
    /// validate a document
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self> {
        Self::parse_with_env(text, format, &|name| std::env::var(name).ok())
    }

    /// Same as [`PipelineConfig::parse`] with a custom variable lookup
    pub fn parse_with_env<F>(text: &str, format: ConfigFormat, lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = format.parse_value(text)?;
        let value = env::substitute_with(value, lookup)?;
        let config: PipelineConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::parse(format, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration in the given format
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        format.render(self)
    }
}

#[derive(Debug, Clone)]
enum DotenvSource {
    /// `.env` in the root directory, skipped when absent
    Beside,
    /// A specific file that must exist
    Explicit(PathBuf),
    Disabled,
}

/// Loads a [`PipelineConfig`] from a file
///
/// # Example
///
/// ```no_run
/// use docpipe::config::ConfigLoader;
///
/// let loader = ConfigLoader::new("config.yml");
/// let config = loader.load()?;
/// let paths = config.paths.resolve(&loader.root()?);
/// println!("PDFs are read from {}", paths.raw_pdf_dir.display());
/// # Ok::<(), docpipe::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    root: Option<PathBuf>,
    dotenv: DotenvSource,
}

impl ConfigLoader {
    /// Create a loader for the file at `path`
    ///
    /// The format comes from the file extension. Relative paths inside the
    /// document resolve against the file's directory unless a root is set.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: None,
            dotenv: DotenvSource::Beside,
        }
    }

    /// Resolve relative paths against `root` instead of the file's directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Load variables from this `.env` file; loading fails if it is missing
    pub fn with_dotenv(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv = DotenvSource::Explicit(path.into());
        self
    }

    /// Do not read any `.env` file
    pub fn without_dotenv(mut self) -> Self {
        self.dotenv = DotenvSource::Disabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the absolute project root used for path resolution
    pub fn root(&self) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => Some(root.as_path()),
            None => self.path.parent(),
        }
        .filter(|root| !root.as_os_str().is_empty());

        if let Some(root) = root.filter(|root| root.is_absolute()) {
            return Ok(root.to_path_buf());
        }
        let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        Ok(match root {
            Some(root) => cwd.join(root),
            None => cwd,
        })
    }

    /// Resolve the configured paths against [`ConfigLoader::root`]
    pub fn resolve_paths(&self, config: &PipelineConfig) -> Result<ResolvedPaths> {
        Ok(config.paths.resolve(&self.root()?))
    }

    /// Read, parse and validate the configuration
    pub fn load(&self) -> Result<PipelineConfig> {
        let format = ConfigFormat::from_path(&self.path)?;
        self.load_dotenv()?;

        tracing::debug!(path = %self.path.display(), %format, "reading configuration");
        let text = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        self.finish(&text, format)
    }

    /// Read the file with `tokio::fs`, then parse and validate it
    pub async fn load_async(&self) -> Result<PipelineConfig> {
        let format = ConfigFormat::from_path(&self.path)?;
        self.load_dotenv()?;

        tracing::debug!(path = %self.path.display(), %format, "reading configuration");
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ConfigError::Io {
                path: self.path.clone(),
                source,
            })?;

        self.finish(&text, format)
    }

    fn finish(&self, text: &str, format: ConfigFormat) -> Result<PipelineConfig> {
        let config = PipelineConfig::parse(text, format)?;
        tracing::info!(
            path = %self.path.display(),
            model = %config.llm.model,
            patterns = config.processing.regex_patterns.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    fn load_dotenv(&self) -> Result<()> {
        match &self.dotenv {
            DotenvSource::Beside => {
                env::load_dotenv(&self.root()?.join(".env"))?;
            }
            DotenvSource::Explicit(path) => {
                dotenvy::from_path(path)?;
                tracing::debug!(path = %path.display(), "loaded .env file");
            }
            DotenvSource::Disabled => {}
        }
        Ok(())
    }
}
