pub mod categorize;
pub mod review;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "qifcat",
    version,
    about = "Enrich your QIF files with categories learned from your previous choices."
)]
pub struct Cli {
    /// QIF file to process
    #[arg(value_name = "QIF_FILE")]
    pub src: String,
    /// Pause after each transaction to review its category
    #[arg(short = 'a', long = "audit-mode")]
    pub audit: bool,
    /// Output filename (default: edit the QIF file in place)
    #[arg(short, long)]
    pub output: Option<String>,
    /// Category store in JSON format (default: ~/.qifcat.json)
    #[arg(short, long, env = "QIFCAT_CONFIG")]
    pub config: Option<String>,
}
