use tally_common::error::SliceError;

const HOBBIES: [&str; 3] = ["cooking", "watching live stream", "writing fanfictions"];
const GOALS: [&str; 2] = ["build a backend server in Go", "master a new language"];

pub fn hobbies() -> [&'static str; 3] {
    HOBBIES
}

pub fn goals() -> Vec<String> {
    GOALS.iter().map(|goal| goal.to_string()).collect()
}

/// Returns `items[start..end]`, with a missing `start` meaning 0 and a missing
/// `end` meaning `items.len()`.
///
/// Fails instead of panicking when `start > end` or `end > items.len()`.
pub fn sub_slice<T>(items: &[T], start: Option<usize>, end: Option<usize>) -> Result<&[T], SliceError> {
    let len = items.len();
    let start = start.unwrap_or(0);
    let end = end.unwrap_or(len);

    items
        .get(start..end)
        .ok_or(SliceError::OutOfRange { start, end, len })
}

pub fn replace_at<T>(list: &mut [T], index: usize, value: T) -> Result<(), SliceError> {
    let len = list.len();
    let slot = list
        .get_mut(index)
        .ok_or(SliceError::IndexOutOfBounds { index, len })?;
    *slot = value;
    Ok(())
}

pub fn append<T>(list: &mut Vec<T>, value: T) {
    list.push(value);
}
