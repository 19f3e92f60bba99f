use crate::error::Result;

/// Minimal byte-sink capability: a destination that accepts bytes and can be
/// closed on demand.
///
/// Any [`std::io::Write`] is a `ByteSink` through the blanket implementation
/// below, so files, buffers, and sockets need no adapter. Writes are
/// all-or-nothing at this seam: a call either forwards the whole slice or
/// fails.
pub trait ByteSink {
    /// Forward the whole slice to the destination.
    fn write(&mut self, buf: &[u8]) -> Result<()>;

    /// Forward a single byte.
    fn write_byte(&mut self, b: u8) -> Result<()> {
        self.write(&[b])
    }

    /// Release the destination. Close failures propagate; they are not
    /// swallowed.
    fn close(&mut self) -> Result<()>;
}

impl<W: std::io::Write> ByteSink for W {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.write_all(buf)?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.flush()?;
        Ok(())
    }
}
