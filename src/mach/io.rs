use crate::lang::Error;
use crate::runtime_error;
use std::collections::VecDeque;
use std::io::{Read, Write};

/// Pull interface for the READ command. Blocks until a bit is available
/// or the source is exhausted.
pub trait BitSource {
    fn read_bit(&mut self) -> Result<i64, Error>;
}

/// Push interface for the PRINT command. Sinks that buffer flush in
/// `finish`, called once after the program halts.
pub trait BitSink {
    fn write_bit(&mut self, bit: i64) -> Result<(), Error>;

    fn finish(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// Reads '0' and '1' characters from a byte stream, skipping whitespace.
pub struct TextSource<R> {
    reader: R,
}

impl<R: Read> TextSource<R> {
    pub fn new(reader: R) -> TextSource<R> {
        TextSource { reader }
    }
}

impl<R: Read> BitSource for TextSource<R> {
    fn read_bit(&mut self) -> Result<i64, Error> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Err(runtime_error!("No bit available to read.")),
                Ok(_) => match byte[0] {
                    b'0' => return Ok(0),
                    b'1' => return Ok(1),
                    b if (b as char).is_whitespace() => continue,
                    _ => return Err(runtime_error!("Invalid value read.")),
                },
                Err(error) => return Err(runtime_error!("Bit input failed: {}.", error)),
            }
        }
    }
}

/// Emits each bit as a '0' or '1' character.
pub struct DigitSink<W> {
    writer: W,
}

impl<W: Write> DigitSink<W> {
    pub fn new(writer: W) -> DigitSink<W> {
        DigitSink { writer }
    }
}

impl<W: Write> BitSink for DigitSink<W> {
    fn write_bit(&mut self, bit: i64) -> Result<(), Error> {
        write!(self.writer, "{}", bit).map_err(|e| runtime_error!("Bit output failed: {}.", e))
    }

    fn finish(&mut self) -> Result<(), Error> {
        self.writer
            .flush()
            .map_err(|e| runtime_error!("Bit output failed: {}.", e))
    }
}

/// Packs every 8 emitted bits into one byte, first-arrived bit in the
/// most significant position. A trailing partial byte is discarded.
pub struct ByteSink<W> {
    writer: W,
    byte: u8,
    filled: u8,
}

impl<W: Write> ByteSink<W> {
    pub fn new(writer: W) -> ByteSink<W> {
        ByteSink {
            writer,
            byte: 0,
            filled: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BitSink for ByteSink<W> {
    fn write_bit(&mut self, bit: i64) -> Result<(), Error> {
        self.byte = (self.byte << 1) | bit as u8;
        self.filled += 1;
        if self.filled == 8 {
            let byte = [self.byte];
            self.byte = 0;
            self.filled = 0;
            self.writer
                .write_all(&byte)
                .map_err(|e| runtime_error!("Bit output failed: {}.", e))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Error> {
        self.writer
            .flush()
            .map_err(|e| runtime_error!("Bit output failed: {}.", e))
    }
}

/// Buffer-backed source for tests and embedding.
impl BitSource for VecDeque<i64> {
    fn read_bit(&mut self) -> Result<i64, Error> {
        self.pop_front()
            .ok_or_else(|| runtime_error!("No bit available to read."))
    }
}

/// Buffer-backed sink for tests and embedding.
impl BitSink for Vec<i64> {
    fn write_bit(&mut self, bit: i64) -> Result<(), Error> {
        self.push(bit);
        Ok(())
    }
}
