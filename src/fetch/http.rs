//! HTTP file downloads.
//!
//! Provides a blocking HTTP client that streams a response body to disk.
//! The body is written next to the target as `<name>.part` and renamed into
//! place only once complete, so an interrupted download never leaves a
//! truncated file at the target path.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

const BUFFER_SIZE: usize = 64 * 1024;

/// Downloads files over HTTP/HTTPS.
///
/// No request timeout is set: the weights are large and slow links are
/// expected, so the transfer runs as long as the server keeps sending.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("trackstrap/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Download `url` to `dest`.
    ///
    /// `on_progress` receives the bytes written so far and the expected total
    /// when the server sent a Content-Length. Returns the number of bytes
    /// written. On failure neither `dest` nor the partial file exist
    /// afterwards (unless `dest` existed before the call).
    pub fn download_to<F>(&self, url: &str, dest: &Path, mut on_progress: F) -> Result<u64>
    where
        F: FnMut(u64, Option<u64>),
    {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        let total = response.content_length();
        let partial = partial_path(dest);

        let written = match write_body(response, &partial, total, &mut on_progress) {
            Ok(written) => written,
            Err(e) => {
                let _ = fs::remove_file(&partial);
                return Err(e);
            }
        };

        if let Err(e) = fs::rename(&partial, dest) {
            let _ = fs::remove_file(&partial);
            return Err(e).with_context(|| format!("Failed to move download to {}", dest.display()));
        }

        tracing::debug!("Wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }
}

/// Path of the in-progress file for a download target.
pub fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("download"));
    name.push(".part");
    dest.with_file_name(name)
}

fn write_body<R, F>(mut body: R, path: &Path, total: Option<u64>, on_progress: &mut F) -> Result<u64>
where
    R: Read,
    F: FnMut(u64, Option<u64>),
{
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut buf = vec![0u8; BUFFER_SIZE];
    let mut written: u64 = 0;

    loop {
        let n = body.read(&mut buf).context("Connection interrupted")?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written += n as u64;
        on_progress(written, total);
    }

    if let Some(expected) = total {
        if written != expected {
            bail!("Incomplete download: got {} of {} bytes", written, expected);
        }
    }

    file.sync_all()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(written)
}
