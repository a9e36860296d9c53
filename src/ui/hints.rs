//! Follow-up guidance printed after a run.

/// Steps to take after a successful bootstrap.
pub fn next_steps() -> [&'static str; 3] {
    [
        "Download the datasets into data/",
        "Train: python tracking/train.py --script ostrack --config vitb_256_mae_ce_32x4_ep300 --save_dir ./output --mode single --use_wandb 0",
        "Evaluate: python tracking/test.py ostrack vitb_384_mae_ce_32x4_ep300 --dataset lasot --threads 4 --num_gpus 1",
    ]
}

/// Remediation command for missing packages.
pub fn install_command(packages: &[String]) -> String {
    format!("pip install {}", packages.join(" "))
}

/// Manual fallback when the pretrained model download fails.
pub fn manual_download(url: &str) -> String {
    format!("Download it manually: {}", url)
}

/// Hint shown when the interpreter can't be used.
pub fn choose_python() -> &'static str {
    "Point --python (or TRACKSTRAP_PYTHON) at a Python 3.8+ interpreter."
}
