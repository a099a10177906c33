//! Forecast lines from a text file, one period per line.

use std::path::{Path, PathBuf};

use crate::{split_lines, FeedError, ForecastSource, StdinSource};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

impl ForecastSource for FileSource {
    async fn fetch_lines(&self) -> Result<Vec<String>, FeedError> {
        if self.is_stdin() {
            return StdinSource.fetch_lines().await;
        }
        let bytes = tokio::fs::read(&self.path).await?;
        let lines = split_lines(&String::from_utf8_lossy(&bytes));
        tracing::debug!(path = %self.path.display(), lines = lines.len(), "read forecast file");
        Ok(lines)
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            StdinSource.describe()
        } else {
            format!("file {}", self.path.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[tokio::test]
    async fn reads_lines_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Tonight Showers --/54° WindS8mph\r\n\r\nMon 14 Rain 68°/54° WindNNE12mph Rain40%\n"
        )
        .unwrap();

        let lines = FileSource::new(file.path()).fetch_lines().await.unwrap();
        assert_eq!(
            lines,
            vec![
                "Tonight Showers --/54° WindS8mph",
                "Mon 14 Rain 68°/54° WindNNE12mph Rain40%",
            ]
        );
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Today Sunny 70\xB0/50\xB0 WindN5mph\n").unwrap();

        let lines = FileSource::new(file.path()).fetch_lines().await.unwrap();
        assert_eq!(lines, vec!["Today Sunny 70\u{FFFD}/50\u{FFFD} WindN5mph"]);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("absent.txt"))
            .fetch_lines()
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::Io(_)));
    }

    #[test]
    fn dash_describes_stdin() {
        assert_eq!(FileSource::new("-").describe(), "standard input");
        assert!(FileSource::new("days.txt").describe().contains("days.txt"));
    }
}
