use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::data::QuestionSource;

/// Command-line configuration.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "question-bank",
    version,
    about = "Browse and filter quiz questions in the terminal",
    long_about = None
)]
pub struct Config {
    /// Where to load questions from: an http(s) URL or a JSON file
    #[arg(short, long, env = "QUESTION_BANK_ENDPOINT")]
    pub endpoint: String,

    /// Show math markup as written instead of typesetting it
    #[arg(long)]
    pub no_math: bool,

    /// Give up on the HTTP request after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// File that receives log output
    #[arg(long, default_value = "question-bank.log")]
    pub log_file: PathBuf,
}

impl Config {
    pub fn source(&self) -> QuestionSource {
        QuestionSource::parse(&self.endpoint)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn typeset_math(&self) -> bool {
        !self.no_math
    }
}
