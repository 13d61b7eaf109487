use std::process::ExitStatus;

use tokio::process::Command;

use crate::command::MinerCommand;
use crate::error::Error;

/// Run the miner to completion with stdio inherited from the launcher.
///
/// A non-zero miner exit is not an error: the status comes back for the
/// caller to inspect or ignore. Only failing to spawn at all is an `Err`.
pub async fn run(cmd: &MinerCommand) -> Result<ExitStatus, Error> {
    let status = Command::new(&cmd.program).args(&cmd.args).status().await?;
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stand_in(program: &str) -> MinerCommand {
        MinerCommand {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[tokio::test]
    async fn failing_command_is_not_an_error() {
        let status = run(&stand_in("false")).await.unwrap();
        assert!(!status.success());
    }

    #[tokio::test]
    async fn succeeding_command_reports_success() {
        let status = run(&stand_in("true")).await.unwrap();
        assert!(status.success());
    }

    #[tokio::test]
    async fn missing_program_is_an_error() {
        assert!(run(&stand_in("./no-such-binary-here")).await.is_err());
    }
}
