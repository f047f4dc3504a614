use crate::ByteSink;

/// Adapts any `std::io::Write` into a `ByteSink`.
///
/// `write_byte` has no way to report failure, so the first I/O error is kept
/// and every byte written after it is dropped. Call `take_error` to check for
/// and clear a failure, after which bytes are forwarded again.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
    error: Option<std::io::Error>,
}

impl<W: std::io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// Return the retained error, if any, and resume forwarding bytes.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    /// Flush the underlying writer. A retained error is returned first.
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.inner.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: std::io::Write> ByteSink for IoSink<W> {
    fn write_byte(&mut self, byte: u8) {
        if self.error.is_some() {
            return;
        }

        if let Err(e) = self.inner.write_all(&[byte]) {
            log::warn!("dropping output after write failure: {e}");
            self.error = Some(e);
        }
    }
}
