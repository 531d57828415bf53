//! Line channel over any buffered reader and writer.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use chainforge_core::application::ports::LineChannel;

/// Reads answers from `R`, writes questions to `W`.
///
/// The terminator (`\n` or `\r\n`) is stripped from answers; everything
/// else is returned as typed.
#[derive(Debug)]
pub struct StreamChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl StreamChannel<BufReader<Stdin>, Stdout> {
    /// Process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineChannel for StreamChannel<R, W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}
