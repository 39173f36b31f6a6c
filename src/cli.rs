use clap::Parser;

use crate::session::{DEFAULT_QUESTION_COUNT, DEFAULT_QUESTION_SECONDS};

#[derive(Parser, Debug)]
#[command(name = "cyberquiz", version, about = "Terminal-based timed cyber-awareness quiz")]
pub struct Cli {
    /// Path to the question bank file
    #[arg(default_value = "questions.yaml")]
    pub bank: String,

    /// Number of questions per session
    #[arg(long, default_value_t = DEFAULT_QUESTION_COUNT)]
    pub count: usize,

    /// Seconds allotted per question
    #[arg(long, default_value_t = DEFAULT_QUESTION_SECONDS)]
    pub seconds: u32,

    /// Results collector base URL; omit to keep results local
    #[arg(long, value_name = "url", env = "CYBERQUIZ_COLLECTOR")]
    pub collector: Option<String>,

    /// Validate the bank and show stats without starting a session
    #[arg(long)]
    pub check: bool,
}
