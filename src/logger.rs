use chrono::{DateTime, Utc};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// One request-log line: timestamp, method, path, status, latency.
pub fn format_entry(
    timestamp: DateTime<Utc>,
    method: &str,
    path: &str,
    status: u16,
    latency_ms: f64,
) -> String {
    format!(
        "{} | {:7} | {:20} | {:3} | {:.3} ms\n",
        timestamp.format("%Y-%m-%d %H:%M:%S"), method, path, status, latency_ms
    )
}

pub async fn append_entry(log_path: &str, entry: &str) -> std::io::Result<()> {

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .await?;

    file.write_all(entry.as_bytes()).await?;
    // tokio only surfaces write errors once the buffered data is flushed
    file.flush().await

}

/// Append one line per served request. `None` disables the file log.
pub async fn log_request(
    log_path: Option<&str>,
    method: &str,
    path: &str,
    status: u16,
    latency_ms: f64,
) {
    let Some(log_path) = log_path else {
        return;
    };

    let log_entry = format_entry(Utc::now(), method, path, status, latency_ms);

    if let Err(e) = append_entry(log_path, &log_entry).await {
        eprintln!("Failed to write to log file {}: {}", log_path, e);
    }
}
