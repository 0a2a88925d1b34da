use std::path::PathBuf;

/// How many validation failures are collected before a line is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Check every field and report all violations together.
    #[default]
    Aggregate,
    /// Stop at the first violated field.
    FailFast,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the `<LastName>.txt` files.
    pub data_dir: PathBuf,
    pub policy: ErrorPolicy,
    /// 0 prints everything, 1 hides banner and headers, 2 also hides prompts.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            policy: ErrorPolicy::default(),
            quiet: 0,
            no_banner: false,
        }
    }
}
