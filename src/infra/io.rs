use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize URLs one per line, each followed by `\n`, no header
pub fn write_urls<W: Write, S: AsRef<str>>(mut out: W, urls: &[S]) -> std::io::Result<()> {
    for url in urls {
        out.write_all(url.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Write the URL list file, replacing any existing content
pub fn write_url_list<P: AsRef<Path>, S: AsRef<str>>(path: P, urls: &[S]) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    write_urls(BufWriter::new(file), urls)
        .with_context(|| format!("Failed to write URLs to {}", path.display()))
}

/// Shorten `text` to at most `width` chars, ending in `...` when cut
pub fn truncate_display(text: &str, width: usize) -> String {
    if text.chars().count() < width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_newline_terminated() {
        let mut buf = Vec::new();
        write_urls(&mut buf, &["https://a", "https://b"]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "https://a\nhttps://b\n");
    }

    #[test]
    fn empty_list_writes_nothing() {
        let mut buf = Vec::new();
        write_urls::<_, &str>(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn url_list_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        std::fs::write(&path, "stale\n").unwrap();

        write_url_list(&path, &["https://x".to_string()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "https://x\n");
    }

    #[test]
    fn truncation_matches_listing_width() {
        assert_eq!(truncate_display("short", 55), "short");
        let long = "x".repeat(60);
        let shown = truncate_display(&long, 55);
        assert_eq!(shown.len(), 55);
        assert!(shown.ends_with("..."));
        // exactly at the width is cut too
        assert_eq!(truncate_display(&"y".repeat(55), 55).len(), 55);
        assert!(truncate_display(&"y".repeat(55), 55).ends_with("..."));
    }
}
