use crate::mprint;
use crate::terminal::{format, print};
use tally_common::config::Config;
use tally_core::slices;

pub fn slices(cfg: &Config) -> anyhow::Result<()> {
    let hobbies = slices::hobbies();
    let first_two = slices::sub_slice(&hobbies, None, Some(2))?;
    let first_by_end = slices::sub_slice(first_two, None, Some(1))?;
    let first_by_range = slices::sub_slice(first_two, Some(0), Some(1))?;
    let tail = slices::sub_slice(&hobbies, Some(1), None)?;
    let last_two = slices::sub_slice(&hobbies, Some(1), Some(3))?;

    let rows = [
        ("hobbies", format::list(&hobbies)),
        ("[:1]", format::list(first_by_end)),
        ("[0:1]", format::list(first_by_range)),
        ("[1:]", format::list(tail)),
        ("[1:3]", format::list(last_two)),
    ];
    print_rows(&rows, cfg);

    if cfg.quiet < 2 {
        mprint!();
    }

    let mut goals = slices::goals();
    let initial = format::list(&goals);
    slices::replace_at(&mut goals, 1, "add a personal project to my resume".to_string())?;
    let replaced = format::list(&goals);
    slices::append(&mut goals, "nail a job".to_string());
    let appended = format::list(&goals);

    let rows = [
        ("goals", initial),
        ("goals[1] = ..", replaced),
        ("append", appended),
    ];
    print_rows(&rows, cfg);

    Ok(())
}

fn print_rows(rows: &[(&str, String)], cfg: &Config) {
    if cfg.quiet > 1 {
        for (_, value) in rows {
            mprint!(value);
        }
        return;
    }

    print::set_key_width(rows.iter().map(|(key, _)| *key));
    for (key, value) in rows {
        print::aligned_line(key, value.clone());
    }
}
