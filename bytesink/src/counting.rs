use crate::ByteSink;

/// Wraps a sink and counts the bytes passed through to it.
#[derive(Default, Debug)]
pub struct CountingSink<S> {
    inner: S,
    count: u64,
}

impl<S: ByteSink> CountingSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, count: 0 }
    }

    /// Number of bytes written since creation or the last `reset`.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ByteSink> ByteSink for CountingSink<S> {
    fn write_byte(&mut self, byte: u8) {
        self.count += 1;
        self.inner.write_byte(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let mut sink = CountingSink::new(Vec::new());
        sink.write(b"Hello, world!!!\r\n");
        assert_eq!(sink.count(), 17);

        sink.write(&[]);
        assert_eq!(sink.count(), 17);

        sink.write_byte(0);
        assert_eq!(sink.count(), 18);

        sink.reset();
        assert_eq!(sink.count(), 0);
        assert_eq!(sink.get_ref().len(), 18);
        assert_eq!(sink.into_inner()[..5], *b"Hello");
    }
}
