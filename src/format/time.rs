use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use std::time::SystemTime;

const DAY_MILLIS: u128 = 86_400_000;

pub fn last_modified_formatted<P: AsRef<Path>>(path: P) -> String {
    let modified = match fs::metadata(path.as_ref()).and_then(|m| m.modified()) {
        Ok(modified) => modified,
        Err(_) => return "N/A".to_string(),
    };
    let local: DateTime<Local> = modified.into();
    local.format("%d %b %Y, %I:%M %p").to_string()
}

pub fn file_age_description<P: AsRef<Path>>(path: P) -> String {
    let modified = match fs::metadata(path.as_ref()).and_then(|m| m.modified()) {
        Ok(modified) => modified,
        Err(_) => return "unknown".to_string(),
    };
    // A modification time in the future counts as zero elapsed time.
    let elapsed = SystemTime::now()
        .duration_since(modified)
        .unwrap_or_default();
    describe_age_days(elapsed.as_millis() / DAY_MILLIS)
}

fn describe_age_days(days: u128) -> String {
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        days => format!("{} days ago", days),
    }
}
