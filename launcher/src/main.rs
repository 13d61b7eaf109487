mod command;
mod error;
mod release;
mod runner;
mod utils;
mod worker;

use std::path::Path;

use anyhow::Error;

/// Payout address the mined funds are attributed to.
const WALLET: &str = "0x4A2377376cde3510Fdd7EbE56cC7c62757cB1FF5";

/// Pool endpoint the miner connects to.
const POOL: &str = "rx.unmineable.com:3333";

/// The one line the launcher itself prints on stdout, before anything runs.
const STATUS_LINE: &str = "Protocol: Mining to MetaMask Ecosystem (32-bit)...";

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    println!("{}", STATUS_LINE);

    // Best-effort launcher: failures land in the log, the exit code stays
    // clean either way.
    if let Err(err) = launch(Path::new(".")).await {
        log::error!("{:?}", err);
    }

    Ok(())
}

async fn launch(dir: &Path) -> Result<(), Error> {
    // Build worker identity
    let label = worker::worker_label(WALLET);

    // Provision the miner release
    let binary = release::ensure_miner(dir).await?;

    // Build the invocation
    let cmd = command::miner_command(&binary, POOL, &label);
    log::info!("launching miner: {}", cmd.command_line());

    // Run to completion; the miner's exit status is logged, not propagated
    let status = runner::run(&cmd).await?;
    log::info!("miner exited: {}", status);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    // Stand-in miner that always fails; launch must still come back Ok.
    #[tokio::test]
    async fn launch_succeeds_even_when_the_miner_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let bin_dir = tmp.path().join("xmrig-6.21.0");
        std::fs::create_dir_all(&bin_dir).unwrap();

        let binary = bin_dir.join("xmrig");
        std::fs::write(&binary, "#!/bin/sh\nexit 70\n").unwrap();
        let mut perms = std::fs::metadata(&binary).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&binary, perms).unwrap();

        assert!(launch(tmp.path()).await.is_ok());
    }
}
