//! UI configuration management.
//!
//! Provides configuration loading, the global verbose flag, and the tunable
//! defaults shared by every window session.

mod defaults;

// Re-export public types
pub use defaults::UiDefaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["filtra.yml", "filtra.yaml"];

/// Public handle that stores the loaded configuration, its source path, and warnings.
pub struct UiConfigHandle {
    pub config: UiConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl UiConfigHandle {
    fn with_config(config: UiConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    pub defaults: UiDefaults,
}

impl UiConfig {
    fn sanitize(mut self) -> Self {
        self.defaults.sanitize();
        self
    }
}

/// Load configuration from disk, optionally forcing a specific path.
/// Out-of-range values are clamped back to their legal range.
pub fn load_ui_config(custom_path: Option<&Path>) -> UiConfigHandle {
    let mut warnings = Vec::new();
    let candidates = get_config_candidates(custom_path);

    for candidate in candidates {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<UiConfig>(&contents) {
                Ok(config) => {
                    let sanitized = config.sanitize();
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return UiConfigHandle::with_config(sanitized, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No config file found; using built-in defaults.".to_string());
    UiConfigHandle::with_config(UiConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("FILTRA_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join(name));
        }
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        for name in CONFIG_FILENAMES {
            candidates.push(exe_dir.join(name));
        }
    }

    candidates
}

static UI_CONFIG_HANDLE: OnceLock<UiConfigHandle> = OnceLock::new();

/// Access the global UI configuration (loaded once per process).
pub fn ui_config_handle() -> &'static UiConfigHandle {
    UI_CONFIG_HANDLE.get_or_init(|| load_ui_config(None))
}

/// Print config source and warnings (only in verbose mode).
pub fn log_config_usage(handle: &UiConfigHandle) {
    if !is_verbose() {
        return;
    }
    if let Some(source) = &handle.source {
        eprintln!("[filtra] Loaded config from {}", source.display());
    } else {
        eprintln!("[filtra] Using built-in defaults");
    }

    for warning in &handle.warnings {
        eprintln!("[filtra] Config warning: {}", warning);
    }
}
