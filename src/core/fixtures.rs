//! Test/recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("NS_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// File name for a recorded body. Commas in a ticker list become dashes.
pub(crate) fn fixture_name(endpoint: &str, tickers: &str, ext: &str) -> String {
    let tickers: String = tickers
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '-' } else { c })
        .collect();
    format!("{endpoint}_{tickers}.{ext}")
}

pub(crate) fn record_fixture(
    endpoint: &str,
    tickers: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join(fixture_name(endpoint, tickers, ext));

    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;

    if env::var("NS_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("NS_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
