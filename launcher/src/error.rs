#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("reqwest")]
    Reqwest(#[from] reqwest::Error),
    #[error("std io")]
    StdIO(#[from] std::io::Error),
    #[error("task join")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("release download returned http {0}")]
    DownloadStatus(reqwest::StatusCode),
    #[error("miner binary missing after unpack: {0:?}")]
    BinaryMissing(std::path::PathBuf),
}
