use std::path::PathBuf;

/// File the calculator writes its results to unless told otherwise.
pub const DEFAULT_OUTPUT_FILE: &str = "financials.txt";

pub struct Config {
    /// Hides the banner printed on startup.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers, 2 prints results only.
    pub quiet: u8,
    /// Where `calc` stores its results. Overwritten on every run.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}
