use crate::error::{Error, Result};
use crate::sink::ByteSink;

/// Decorator that forwards every write to an underlying sink while tracking
/// the total number of bytes successfully forwarded.
///
/// The counter only moves when the sink accepted the whole slice, so
/// `byte_count` always equals the sum of the lengths of all successful
/// writes. A failed forward leaves the count untouched (all-or-nothing
/// accounting).
///
/// One instance wraps one sink for its entire lifetime and takes `&mut self`
/// on every write; sharing an instance across threads requires external
/// synchronization.
pub struct CountingSink<S: ByteSink> {
    sink: S,
    count: u64,
    closed: bool,
}

impl<S: ByteSink> CountingSink<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            count: 0,
            closed: false,
        }
    }

    /// Total bytes successfully forwarded so far. Valid at any time,
    /// including after `close`.
    pub fn byte_count(&self) -> u64 {
        self.count
    }

    /// Consume the wrapper and hand back the underlying sink.
    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: ByteSink> ByteSink for CountingSink<S> {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.sink.write(buf)?;
        self.count += buf.len() as u64;
        Ok(())
    }

    /// Close the underlying sink exactly once. A second close fails with
    /// [`Error::Closed`] rather than being silently ignored.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.sink.close()?;
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectingSink;

    impl std::io::Write for RejectingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink rejected write"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn counts_sum_of_successful_writes() {
        let mut sink = CountingSink::new(Vec::new());
        sink.write(b"hello").unwrap();
        sink.write(b" world").unwrap();
        sink.write_byte(b'!').unwrap();
        assert_eq!(sink.byte_count(), 12);
        assert_eq!(sink.into_inner(), b"hello world!");
    }

    #[test]
    fn empty_write_leaves_count_unchanged() {
        let mut sink = CountingSink::new(Vec::new());
        sink.write(b"abc").unwrap();
        sink.write(b"").unwrap();
        assert_eq!(sink.byte_count(), 3);
    }

    #[test]
    fn failed_write_does_not_count() {
        let mut sink = CountingSink::new(RejectingSink);
        let err = sink.write(b"hello").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(sink.byte_count(), 0);
    }

    #[test]
    fn write_after_close_fails_closed() {
        let mut sink = CountingSink::new(Vec::new());
        sink.write(b"hello").unwrap();
        sink.close().unwrap();
        let err = sink.write(b"more").unwrap_err();
        assert!(matches!(err, Error::Closed));
        assert_eq!(sink.byte_count(), 5);
    }

    #[test]
    fn double_close_fails_closed() {
        let mut sink = CountingSink::new(Vec::new());
        sink.close().unwrap();
        assert!(matches!(sink.close().unwrap_err(), Error::Closed));
    }
}
