//! Forecast lines piped on standard input.

use tokio::io::AsyncReadExt;

use crate::{split_lines, FeedError, ForecastSource};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl ForecastSource for StdinSource {
    async fn fetch_lines(&self) -> Result<Vec<String>, FeedError> {
        let mut bytes = Vec::new();
        tokio::io::stdin().read_to_end(&mut bytes).await?;
        let lines = split_lines(&String::from_utf8_lossy(&bytes));
        tracing::debug!(lines = lines.len(), "read forecast lines from stdin");
        Ok(lines)
    }

    fn describe(&self) -> String {
        "standard input".to_string()
    }
}
