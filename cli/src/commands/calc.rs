use std::io;

use colored::*;

use crate::mprint;
use crate::terminal::{colors, format, print};
use tally_common::config::Config;
use tally_common::error::PersistError;
use tally_common::finance::FinancialResults;
use tally_core::calculator::{CalculatorService, TokenReader};
use tally_core::storage::FileStore;

pub fn calc(cfg: &Config) -> anyhow::Result<()> {
    let source = TokenReader::new(io::stdin().lock(), io::stdout());
    let store = FileStore::new(&cfg.output);
    let mut service = CalculatorService::new(Box::new(source), Box::new(store));

    let outcome = service.run()?;
    print_results(&outcome.results, cfg);

    match outcome.persisted {
        Ok(path) => {
            if cfg.quiet == 0 {
                let saved = format!("Saved to {}", path.display()).color(colors::TEXT_DEFAULT);
                print::fat_separator();
                print::centerln(&saved.to_string());
            }
        }
        Err(e) => tracing::warn!("{}", write_warning(e)),
    }

    Ok(())
}

fn print_results(results: &FinancialResults, cfg: &Config) {
    let rows = [
        ("Earnings before tax", results.ebt),
        ("Earnings after tax", results.profit),
        ("Ratio", results.ratio),
    ];

    if cfg.quiet > 1 {
        for (key, value) in rows {
            mprint!(&format!("{key}: {value:.2}"));
        }
        return;
    }

    mprint!();
    print::set_key_width(rows.iter().map(|(key, _)| *key));
    for (key, value) in rows {
        print::aligned_line(key, format::amount(value));
    }
}

/// One line naming the file and the io cause, each exactly once.
fn write_warning(err: PersistError) -> String {
    format!("{:#}", anyhow::Error::from(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn write_warning_names_cause_once() {
        let err = PersistError::Write {
            path: PathBuf::from("/nonexistent/dir/f.txt"),
            source: io::Error::other("disk full"),
        };
        assert_eq!(
            write_warning(err),
            "failed to write results to /nonexistent/dir/f.txt: disk full"
        );
    }
}
