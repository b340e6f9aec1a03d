use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    /// Directory holding one `<title>.txt` file per page
    pub const NOTES_DIR: &str = "NOTES_DIR";
    /// Directory globbed for `*.html` templates at startup (default: <backend>/html)
    pub const TEMPLATES_DIR: &str = "TEMPLATES_DIR";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const NOTES_DIR: &str = "./My-Notes";
    pub const TEMPLATES_DIR: &str = "html";
}

/// Returns the absolute path to the notes-backend directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so bundled assets resolve
/// regardless of the working directory at runtime.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub notes_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var(env_vars::PORT) {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "Invalid {} value '{}', falling back to {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            Err(_) => defaults::PORT,
        };

        Self {
            port,
            bind_address: env::var(env_vars::BIND_ADDRESS)
                .unwrap_or_else(|_| defaults::BIND_ADDRESS.to_string()),
            notes_dir: env::var(env_vars::NOTES_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(defaults::NOTES_DIR)),
            templates_dir: env::var(env_vars::TEMPLATES_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| backend_dir().join(defaults::TEMPLATES_DIR)),
        }
    }
}
