//! Summary figures and the textual batch report.
//!
//! Everything here is a pure function over an already-built
//! [`BatchResult`]; nothing touches the filesystem.

use std::fmt::Write as _;
use std::time::Duration;

use crate::result::{BatchResult, FileResult, Outcome};

/// Compression ratio as a percentage: destination bytes over source bytes.
/// Zero when the source is empty.
pub fn ratio_pct(dest_bytes: u64, source_bytes: u64) -> f64 {
    if source_bytes == 0 {
        0.0
    } else {
        dest_bytes as f64 / source_bytes as f64 * 100.0
    }
}

/// Aggregate throughput in bytes per second over the summed per-file time.
pub fn throughput(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        0.0
    } else {
        bytes as f64 / secs
    }
}

pub fn human_bytes(n: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", n)
    } else {
        format!("{:.2} {}", v, UNITS[unit])
    }
}

/// Render a batch as a human-readable report: one line per file, then the
/// aggregate block. Failed files carry their full error chain.
pub fn render(batch: &BatchResult, title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", title);

    for file in &batch.files {
        let _ = writeln!(out, "{}", file_line(file));
    }
    if !batch.is_empty() {
        let _ = writeln!(out);
    }

    let total_src = batch.total_source_bytes();
    let total_dst = batch.total_dest_bytes();
    let elapsed = batch.total_elapsed();

    let _ = writeln!(out, "  files       : {}", batch.files.len());
    let _ = writeln!(out, "  succeeded   : {}", batch.succeeded());
    let _ = writeln!(out, "  failed      : {}", batch.failed());
    let _ = writeln!(out, "  source      : {}", human_bytes(total_src));
    let _ = writeln!(out, "  destination : {}", human_bytes(total_dst));
    let _ = writeln!(out, "  ratio       : {:.1}%", ratio_pct(total_dst, total_src));
    let _ = writeln!(
        out,
        "  throughput  : {}/s",
        human_bytes(throughput(total_src, elapsed) as u64)
    );
    let _ = writeln!(out, "  elapsed     : {:.3}s", elapsed.as_secs_f64());
    out
}

fn file_line(file: &FileResult) -> String {
    match &file.outcome {
        Outcome::Success => format!(
            "  {}  ->  {}  [{}]  {} -> {}  ({:.1}%)  {:.3}s",
            file.source.display(),
            file.dest.display(),
            file.algorithm,
            human_bytes(file.source_bytes),
            human_bytes(file.dest_bytes),
            ratio_pct(file.dest_bytes, file.source_bytes),
            file.elapsed.as_secs_f64()
        ),
        Outcome::Failed(err) => {
            format!("  {}  FAILED: {}", file.source.display(), error_chain(err))
        }
    }
}

/// Flatten an error and its sources into one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut line = err.to_string();
    let mut cause = err.source();
    while let Some(err) = cause {
        line.push_str(": ");
        line.push_str(&err.to_string());
        cause = err.source();
    }
    line
}
