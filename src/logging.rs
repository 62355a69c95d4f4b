//! Output tee: duplicate console output into an append-only log file.
//!
//! [`OutputTee`] owns a long-lived append-mode file handle and exposes the
//! four output surfaces as explicit sinks instead of intercepted globals:
//! a line-oriented log call, an error log call, and byte-level writers
//! wrapping stdout/stderr. Every write lands in the log file first, then is
//! forwarded unmodified to the original destination.
//!
//! The tee also plugs into tracing as a [`MakeWriter`], so subscriber output
//! flows through the same file.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Append-only log file sink shared by all teed surfaces.
///
/// The file handle lives for as long as the `Arc` does, in practice the
/// process lifetime; it is never explicitly closed. Installing a second tee
/// (over the same file or another) is not guarded against: the two sinks are
/// independent and their interleaving in a shared file is unspecified.
pub struct OutputTee {
    file: Mutex<File>,
}

impl OutputTee {
    /// Open `path` in create+append mode and return the shared sink.
    ///
    /// Open failures propagate: there is no safe fallback once log capture
    /// is lost, so the caller decides whether that is fatal.
    pub fn install<P: AsRef<Path>>(path: P) -> io::Result<Arc<Self>> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Arc::new(Self {
            file: Mutex::new(file),
        }))
    }

    /// Line-oriented log call: append the formatted text to the file, then
    /// forward the same line to stdout.
    pub fn log(&self, args: fmt::Arguments<'_>) {
        let line = args.to_string();
        self.append(&line);
        self.append(" ");
        println!("{line}");
    }

    /// Error-log counterpart of [`log`](Self::log); forwards to stderr.
    pub fn log_error(&self, args: fmt::Arguments<'_>) {
        let line = args.to_string();
        self.append(&line);
        self.append(" ");
        eprintln!("{line}");
    }

    /// Teed stdout stream.
    pub fn stdout(self: &Arc<Self>) -> TeeWriter<io::Stdout> {
        self.writer(io::stdout())
    }

    /// Teed stderr stream.
    pub fn stderr(self: &Arc<Self>) -> TeeWriter<io::Stderr> {
        self.writer(io::stderr())
    }

    /// Wrap an arbitrary writer so its output is duplicated into the file.
    pub fn writer<W: Write>(self: &Arc<Self>, inner: W) -> TeeWriter<W> {
        TeeWriter {
            sink: Arc::clone(self),
            inner,
        }
    }

    /// A [`MakeWriter`] routing tracing output through the tee to stderr.
    pub fn tracing_writer(self: &Arc<Self>) -> TeeMakeWriter {
        TeeMakeWriter {
            tee: Arc::clone(self),
        }
    }

    /// Fire-and-forget append. Write errors are swallowed: a failing log
    /// file must not take the teed stream down with it.
    fn append(&self, text: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(text.as_bytes());
        }
    }
}

/// Writer that duplicates everything into the tee's log file before
/// forwarding to the inner writer.
pub struct TeeWriter<W> {
    sink: Arc<OutputTee>,
    inner: W,
}

impl<W: Write> Write for TeeWriter<W> {
    /// The return value is the inner writer's, byte for byte: the tee is
    /// invisible to the caller even when the file append does less (or
    /// nothing at all).
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.append(&String::from_utf8_lossy(buf));
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// [`MakeWriter`] handing out teed stderr writers to the subscriber.
#[derive(Clone)]
pub struct TeeMakeWriter {
    tee: Arc<OutputTee>,
}

impl<'a> MakeWriter<'a> for TeeMakeWriter {
    type Writer = TeeWriter<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        self.tee.stderr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read(path: &std::path::Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn install_creates_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.log");
        let _tee = OutputTee::install(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn install_fails_loud_on_bad_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("out.log");
        assert!(OutputTee::install(&path).is_err());
    }

    #[test]
    fn install_appends_to_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.log");
        std::fs::write(&path, "earlier run\n").unwrap();

        let tee = OutputTee::install(&path).unwrap();
        tee.log(format_args!("later run"));
        assert_eq!(read(&path), "earlier run\nlater run ");
    }

    #[test]
    fn log_appends_formatted_text_with_trailing_space() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.log");
        let tee = OutputTee::install(&path).unwrap();

        tee.log(format_args!("{} {}", "a", "b"));
        assert_eq!(read(&path), "a b ");

        tee.log_error(format_args!("boom: {}", 7));
        assert_eq!(read(&path), "a b boom: 7 ");
    }

    #[test]
    fn writer_duplicates_and_forwards() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.log");
        let tee = OutputTee::install(&path).unwrap();

        let mut w = tee.writer(Vec::new());
        let n = w.write(b"hello").unwrap();
        assert_eq!(n, 5);
        assert_eq!(w.inner, b"hello");
        assert_eq!(read(&path), "hello");
    }

    /// Inner writer that accepts only one byte per call.
    struct OneByte(Vec<u8>);

    impl Write for OneByte {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.is_empty() {
                return Ok(0);
            }
            self.0.push(buf[0]);
            Ok(1)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_returns_what_the_inner_writer_returned() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.log");
        let tee = OutputTee::install(&path).unwrap();

        let mut w = tee.writer(OneByte(Vec::new()));
        let n = w.write(b"xyz").unwrap();
        // The file got the whole buffer, but the caller sees the inner
        // writer's short count.
        assert_eq!(n, 1);
        assert_eq!(read(&path), "xyz");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily_for_the_file_only() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.log");
        let tee = OutputTee::install(&path).unwrap();

        let mut w = tee.writer(Vec::new());
        let bytes = [b'o', b'k', 0xFF];
        w.write(&bytes).unwrap();

        // Inner writer gets the original bytes untouched.
        assert_eq!(w.inner, bytes);
        // The file gets the replacement character instead of raw 0xFF.
        assert_eq!(read(&path), "ok\u{FFFD}");
    }

    #[test]
    fn surfaces_share_one_file_in_call_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.log");
        let tee = OutputTee::install(&path).unwrap();

        tee.log(format_args!("one"));
        tee.writer(Vec::new()).write_all(b"two\n").unwrap();
        tee.log_error(format_args!("three"));
        assert_eq!(read(&path), "one two\nthree ");
    }
}
