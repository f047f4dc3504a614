//! This crate provides `ByteSink`, an output which accepts one byte at a time.
//!
//! Implementors supply `write_byte` and get `write` for free, which pushes a
//! whole buffer through `write_byte` in order. The sink decides what happens
//! to each byte and what to do when the underlying transport fails; `write`
//! adds no buffering, retries, or error handling of its own.
//!
//! ```
//! use bytesink::ByteSink;
//!
//! struct Uart {
//!     sent: Vec<u8>,
//! }
//!
//! impl ByteSink for Uart {
//!     fn write_byte(&mut self, byte: u8) {
//!         self.sent.push(byte);
//!     }
//! }
//!
//! let mut uart = Uart { sent: Vec::new() };
//! uart.write(b"Hello, world!!!\r\n");
//! assert_eq!(uart.sent.len(), 17);
//! ```

mod counting;
mod io;

pub use counting::CountingSink;
pub use io::IoSink;

/// An output which accepts bytes one at a time.
pub trait ByteSink {
    /// Accept exactly one byte. This is where the actual output happens.
    fn write_byte(&mut self, byte: u8);

    /// Call `write_byte` once for each byte in `buffer`, starting at index 0.
    /// An empty buffer results in no calls.
    fn write(&mut self, buffer: &[u8]) {
        log::trace!("writing {} bytes", buffer.len());
        for &byte in buffer {
            self.write_byte(byte);
        }
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    fn write(&mut self, buffer: &[u8]) {
        (**self).write(buffer)
    }
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    fn write(&mut self, buffer: &[u8]) {
        (**self).write(buffer)
    }
}

impl ByteSink for Vec<u8> {
    fn write_byte(&mut self, byte: u8) {
        self.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // records every call to `write_byte`
    #[derive(Default)]
    struct Recorder {
        calls: Vec<u8>,
    }

    impl ByteSink for Recorder {
        fn write_byte(&mut self, byte: u8) {
            self.calls.push(byte);
        }
    }

    #[test]
    fn typical() {
        let mut sink = Recorder::default();
        let message = "Hello, world!!!\r\n";

        sink.write(message.as_bytes());

        assert_eq!(sink.calls.len(), 17);
        assert_eq!(sink.calls, message.as_bytes());
    }

    #[test]
    fn empty() {
        let mut sink = Recorder::default();
        sink.write(&[]);
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn in_order() {
        let buffer: Vec<u8> = (0..=255).collect();
        for len in [0, 1, 2, 3, 17, 255, 256] {
            let mut sink = Recorder::default();
            sink.write(&buffer[..len]);
            assert_eq!(sink.calls, &buffer[..len]);
        }
    }

    #[test]
    fn repeated_writes_append() {
        let mut sink = Recorder::default();
        sink.write(b"ab");
        sink.write_byte(b'c');
        sink.write(b"de");
        assert_eq!(sink.calls, b"abcde");
    }

    fn send<S: ByteSink>(mut sink: S, buffer: &[u8]) {
        sink.write(buffer);
    }

    #[test]
    fn through_references() {
        let mut sink = Recorder::default();
        send(&mut sink, b"ref");

        let mut boxed: Box<dyn ByteSink> = Box::new(Vec::new());
        boxed.write(b"dyn");

        let dynamic: &mut dyn ByteSink = &mut sink;
        dynamic.write(b"!");

        assert_eq!(sink.calls, b"ref!");
    }

    #[test]
    fn vec() {
        let mut sink = vec![0xff];
        sink.write(&[1, 2, 3]);
        assert_eq!(sink, [0xff, 1, 2, 3]);
    }
}
