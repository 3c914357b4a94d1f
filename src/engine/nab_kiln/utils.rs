use std::fmt::Display;

// Join the display form of each item with a separator
pub fn join_display<I>(separator: &str, iter: I) -> String
where I: IntoIterator,
      I::Item: Display
{
    let mut out = String::new();
    let mut first = true;
    for i in iter
    {
        match first
        {
            true => { first = false; }
            false => { out.push_str(separator); }
        };
        out.push_str(i.to_string().as_str());
    }
    out
}

// Normalize a relative path string so equivalent spellings compare equal
pub fn normalize_rel_path(path: &str) -> String
{
    let unified = path.replace('\\', "/");
    let mut parts = Vec::new();
    for part in unified.split('/')
    {
        match part
        {
            "" | "." => {},
            _ => parts.push(part),
        }
    }
    parts.join("/")
}
