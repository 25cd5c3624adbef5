use std::path::PathBuf;

use anyhow::Context;

use crate::mprint;
use crate::terminal::{format, print};
use tally_common::config::Config;
use tally_core::conversion;

pub fn convert(tokens: Vec<String>, file: Option<PathBuf>, cfg: &Config) -> anyhow::Result<()> {
    let mut all = match file {
        Some(path) => conversion::read_tokens(&path)?,
        None => Vec::new(),
    };
    all.extend(tokens);

    if all.is_empty() {
        anyhow::bail!("nothing to convert, pass tokens or --file");
    }

    let values = conversion::strings_to_floats(&all).context("Converting string to float failed")?;

    if cfg.quiet > 1 {
        mprint!(&format::list(&values));
        return Ok(());
    }

    print::set_key_width(all.iter().map(String::as_str));
    for (token, value) in all.iter().zip(&values) {
        print::aligned_line(token, value.to_string());
    }

    Ok(())
}
