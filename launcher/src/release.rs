use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Pinned release archive published by the xmrig project.
const RELEASE_URL: &str =
    "https://github.com/xmrig/xmrig/releases/download/v6.21.0/xmrig-6.21.0-linux-static-i686.tar.gz";

/// Path of the miner binary inside the unpacked archive.
const BINARY_PATH: &str = "xmrig-6.21.0/xmrig";

/// Download and unpack the miner release into `dir`, returning the path to
/// the miner binary. A binary left behind by a previous run is reused.
pub async fn ensure_miner(dir: &Path) -> Result<PathBuf, Error> {
    let binary = dir.join(BINARY_PATH);
    if binary.exists() {
        log::info!("miner already provisioned: {}", binary.display());
        return Ok(binary);
    }

    log::info!("fetching miner release: {}", RELEASE_URL);
    let client = reqwest::Client::new();
    let response = client.get(RELEASE_URL).send().await?;
    if !response.status().is_success() {
        return Err(Error::DownloadStatus(response.status()));
    }
    let archive = response.bytes().await?;
    log::info!("downloaded {} bytes, unpacking", archive.len());

    // Unpack on a blocking thread to keep the runtime free
    let dest = dir.to_path_buf();
    tokio::task::spawn_blocking(move || unpack(&archive, &dest)).await??;

    if !binary.exists() {
        return Err(Error::BinaryMissing(binary));
    }
    Ok(binary)
}

// The archive is a gzip-compressed tarball; entry modes (the binary's
// executable bit included) are preserved by unpack.
fn unpack(archive: &[u8], dest: &Path) -> Result<(), Error> {
    let decoder = flate2::read::GzDecoder::new(Cursor::new(archive));
    let mut tarball = tar::Archive::new(decoder);
    tarball.unpack(dest)?;
    Ok(())
}
