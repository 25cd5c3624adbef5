use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tally_common::error::PersistError;
use tally_common::finance::FinancialResults;
use tally_common::storage::ResultStore;

/// Renders results in the flat three-line format written to disk.
pub fn format_results(results: &FinancialResults) -> String {
    format!(
        "EBT: {:.2}\nProfit: {:.2}\nRatio: {:.2}\n",
        results.ebt, results.profit, results.ratio
    )
}

/// Stores results in a single text file, truncating it on every write.
///
/// The write is not atomic. A crash halfway through can leave a partial file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, contents: &str) -> std::io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(&self.path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    }
}

impl ResultStore for FileStore {
    fn store(&mut self, results: &FinancialResults) -> Result<PathBuf, PersistError> {
        self.write(&format_results(results))
            .map_err(|source| PersistError::Write {
                path: self.path.clone(),
                source,
            })?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn results(ebt: f64, profit: f64, ratio: f64) -> FinancialResults {
        FinancialResults { ebt, profit, ratio }
    }

    #[test]
    fn format_matches_file_layout() {
        assert_eq!(
            format_results(&results(600.0, 400.0, 1.5)),
            "EBT: 600.00\nProfit: 400.00\nRatio: 1.50\n"
        );
    }

    #[test]
    fn format_rounds_to_two_places() {
        assert_eq!(
            format_results(&results(1.0 / 3.0, -2.005, 10.0)),
            "EBT: 0.33\nProfit: -2.00\nRatio: 10.00\n"
        );
    }

    #[test]
    fn second_store_replaces_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("financials.txt"));

        store.store(&results(12345.0, 9999.0, 1.23)).unwrap();
        let path = store.store(&results(1.0, 2.0, 0.5)).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "EBT: 1.00\nProfit: 2.00\nRatio: 0.50\n"
        );
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("financials.txt");
        let mut store = FileStore::new(&target);

        match store.store(&results(1.0, 1.0, 1.0)) {
            Err(PersistError::Write { path, .. }) => assert_eq!(path, target),
            other => panic!("expected write error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_not_group_writable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("financials.txt"));
        let path = store.store(&results(1.0, 1.0, 1.0)).unwrap();

        let mode = fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o022, 0);
        assert_eq!(mode & 0o600, 0o600);
    }
}
