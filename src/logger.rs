use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens the log file in append mode. Later calls keep the first file.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let _ = write_line(file, message);
    }
}

fn write_line(out: &mut impl Write, message: &str) -> std::io::Result<()> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    writeln!(out, "[{}] {}", timestamp, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let mut out = Vec::new();
        write_line(&mut out, "GET http://127.0.0.1:5000/quizzes").unwrap();
        write_line(&mut out, "second").unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        // "[YYYY-MM-DD HH:MM:SS.mmm] message"
        let (stamp, message) = lines[0].split_once("] ").unwrap();
        assert_eq!(message, "GET http://127.0.0.1:5000/quizzes");
        let stamp = stamp.strip_prefix('[').unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S%.3f").is_ok());
        assert_eq!(stamp.len(), 23);
        assert!(lines[1].ends_with("] second"));
    }

    #[test]
    fn test_lines_append_after_existing_content() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "earlier\n").unwrap();

        let mut handle = OpenOptions::new().append(true).open(file.path()).unwrap();
        write_line(&mut handle, "later").unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("earlier\n["));
        assert!(contents.trim_end().ends_with("] later"));
    }
}
