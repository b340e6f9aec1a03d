//! HTML rendering for the page routes.
//!
//! Handlers only see [`PageRenderer`]: a logical template name plus a JSON
//! payload in, markup out. [`TemplateRenderer`] is the minijinja-backed
//! implementation, loaded once at startup from `<templates-dir>/*.html` and
//! read-only afterwards.

use minijinja::Environment;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Logical templates the page routes render; startup fails if any is absent
pub const REQUIRED_TEMPLATES: [&str; 4] = ["list", "add", "view", "edit"];

const TEMPLATE_EXTENSION: &str = ".html";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid template pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to scan templates: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("failed to read template {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing template '{0}'")]
    MissingTemplate(String),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to build template context: {0}")]
    Context(#[from] serde_json::Error),
}

pub trait PageRenderer: Send + Sync {
    fn render(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;
}

pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Parse every `*.html` file in `dir`. Template names keep their extension,
    /// so minijinja auto-escapes their output.
    pub fn load(dir: &Path) -> Result<Self, RenderError> {
        let pattern = dir.join(format!("*{}", TEMPLATE_EXTENSION));
        let mut sources = Vec::new();

        for entry in glob::glob(&pattern.to_string_lossy())? {
            let path = entry?;
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let name = name.to_string();
            let source = fs::read_to_string(&path).map_err(|source| RenderError::Io {
                path: path.clone(),
                source,
            })?;
            sources.push((name, source));
        }

        log::info!(
            "[TEMPLATES] Loaded {} template(s) from {}",
            sources.len(),
            dir.display()
        );
        Self::from_sources(sources)
    }

    pub fn from_sources<I>(sources: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut env = Environment::new();
        for (name, source) in sources {
            env.add_template_owned(name, source)?;
        }

        for name in REQUIRED_TEMPLATES {
            if env.get_template(&template_file(name)).is_err() {
                return Err(RenderError::MissingTemplate(name.to_string()));
            }
        }

        Ok(Self { env })
    }
}

impl PageRenderer for TemplateRenderer {
    fn render(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let template = self.env.get_template(&template_file(name))?;
        Ok(template.render(data)?)
    }
}

fn template_file(name: &str) -> String {
    format!("{}{}", name, TEMPLATE_EXTENSION)
}
