use crate::app::format::MeasurementSystem;
use clap::Parser;
use route_model_lib::AssemblerConfig;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Route Viewer - Prints the classified turn instructions of a computed route
pub struct Settings {
    /// Route document (JSON) produced by the route source
    #[clap(value_name = "FILE")]
    pub route_file: PathBuf,

    /// Units used for distances in the instruction list
    #[clap(short, long, value_enum, default_value_t = MeasurementSystem::Metric)]
    pub units: MeasurementSystem,

    /// Keep every straight continuation as its own instruction
    #[clap(long)]
    pub no_fold: bool,

    /// Wording of the synthetic start instruction
    #[clap(long, default_value = "Start!")]
    pub start_text: String,

    /// Log filter used when RUST_LOG is not set
    #[clap(long, default_value = "info")]
    pub log_level: String,
}

impl Settings {
    /// Assembler configuration derived from the command line
    pub fn assembler_config(&self) -> AssemblerConfig {
        AssemblerConfig {
            start_text: self.start_text.clone(),
            fold_continuations: !self.no_fold,
        }
    }
}
