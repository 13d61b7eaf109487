use crate::utils::truncate_to;

/// Currency tag understood by the pool.
const TAG: &str = "ETC";

/// Rig name appended so the pool can attribute shares to this machine.
const SUFFIX: &str = "SurvivalRig";

/// Upper bound on the rendered label.
pub const WORKER_LABEL_CAP: usize = 256;

/// Format the worker identity handed to the miner as `-u`.
///
/// The shape is `TAG:<account>.SUFFIX`, capped at [`WORKER_LABEL_CAP`] bytes.
pub fn worker_label(account: &str) -> String {
    truncate_to(WORKER_LABEL_CAP, format!("{}:{}.{}", TAG, account, SUFFIX))
}
