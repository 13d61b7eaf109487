use std::path::{Path, PathBuf};

use crate::utils::truncate_to;

/// Hash algorithm flag handed to the miner.
const ALGO: &str = "rx/0";

/// Upper bound on the rendered command line.
pub const COMMAND_LINE_CAP: usize = 1024;

/// A fully resolved miner invocation: program path plus argument vector.
///
/// Arguments go to the OS as a vector; nothing is ever parsed by a shell.
#[derive(Debug)]
pub struct MinerCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Build the miner invocation for the given endpoint and worker label.
pub fn miner_command(binary: &Path, endpoint: &str, label: &str) -> MinerCommand {
    MinerCommand {
        program: binary.to_path_buf(),
        args: vec![
            "-o".to_string(),
            endpoint.to_string(),
            "-u".to_string(),
            label.to_string(),
            "-p".to_string(),
            "x".to_string(),
            "-a".to_string(),
            ALGO.to_string(),
            "--threads=2".to_string(),
            "--cpu-priority=5".to_string(),
            "--donate-level".to_string(),
            "1".to_string(),
        ],
    }
}

impl MinerCommand {
    /// Render the invocation as one space-joined line, capped at
    /// [`COMMAND_LINE_CAP`] bytes. Used for the log only.
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        truncate_to(COMMAND_LINE_CAP, line)
    }
}
