use std::path::PathBuf;

/// Environment variable naming the dataset when no CLI argument is given.
pub const DATA_ENV: &str = "POKEDASH_DATA";

/// Default dataset file, looked up in the working directory.
pub const DEFAULT_DATA_FILE: &str = "pokedata.csv";

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Dataset to open at startup, if any.
    pub data_path: Option<PathBuf>,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            window_size: [1280.0, 860.0],
            min_window_size: [640.0, 420.0],
        }
    }
}

impl DashboardConfig {
    /// First CLI argument, then `POKEDASH_DATA`, then `pokedata.csv` when
    /// that file exists.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::args_os().nth(1).map(PathBuf::from),
            std::env::var_os(DATA_ENV).map(PathBuf::from),
        )
    }

    fn resolve(arg: Option<PathBuf>, env: Option<PathBuf>) -> Self {
        let data_path = arg.or(env).or_else(|| {
            let fallback = PathBuf::from(DEFAULT_DATA_FILE);
            fallback.exists().then_some(fallback)
        });
        Self {
            data_path,
            ..Self::default()
        }
    }
}
