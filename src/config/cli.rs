use crate::core::report::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "event-calendar")]
#[command(about = "Walk through an in-memory event calendar and print its reports")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Report format: text, json or csv (overrides the config file)")]
    pub format: Option<ReportFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
