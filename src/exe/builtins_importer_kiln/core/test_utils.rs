use chrono::{DateTime, Duration, TimeZone, Utc};
use std::fs::File;
use std::path::Path;

// A fixed instant well in the past, so real writes are always newer
pub fn t0() -> DateTime<Utc>
{
    Utc.timestamp_opt(1_600_000_000, 0).unwrap()
}

pub fn set_mtime(path: impl AsRef<Path>, time: DateTime<Utc>)
{
    let file = File::options().write(true).open(path.as_ref()).unwrap();
    file.set_modified(time.into()).unwrap();
}

// Write a file and give it an mtime relative to t0
pub fn write_at(path: impl AsRef<Path>, contents: impl AsRef<[u8]>, seconds_from_t0: i64)
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).unwrap(); }
    std::fs::write(path, contents).unwrap();
    set_mtime(path, t0() + Duration::seconds(seconds_from_t0));
}

// Directories get their times bumped by writes, push them back too
pub fn age_dir(path: impl AsRef<Path>, seconds_from_t0: i64)
{
    let time: std::time::SystemTime = (t0() + Duration::seconds(seconds_from_t0)).into();
    let dir = File::open(path.as_ref()).unwrap();
    dir.set_times(std::fs::FileTimes::new().set_modified(time)).unwrap();
}
