use std::io::{self, Write};

use super::Sink;

/// Writes each line, newline terminated, to standard output or standard error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsoleSink {
    #[default]
    Stdout,
    Stderr,
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> crate::Result<()> {
        match self {
            ConsoleSink::Stdout => writeln!(io::stdout().lock(), "{line}")?,
            ConsoleSink::Stderr => writeln!(io::stderr().lock(), "{line}")?,
        }

        Ok(())
    }
}

/// Writes each line, newline terminated, into any [`Write`] implementor.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> crate::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::io::{Read, Seek, SeekFrom};

    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::new());

        sink.write_line("9:5:0 [INFO] one").unwrap();
        sink.write_line("9:5:0 [WARN] two").unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "9:5:0 [INFO] one\n9:5:0 [WARN] two\n");
    }

    #[test]
    fn writer_sink_writes_to_file() -> anyhow::Result<()> {
        let file = tempfile::tempfile()?;
        let mut sink = WriterSink::new(file);

        sink.write_line("persisted")?;

        let mut file = sink.into_inner();
        file.seek(SeekFrom::Start(0))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        assert_eq!(contents, "persisted\n");
        Ok(())
    }

    #[test]
    fn writer_errors_surface_as_sink_errors() {
        let mut sink = WriterSink::new(BrokenPipe);

        let err = sink.write_line("lost").unwrap_err();

        assert!(matches!(err, crate::Error::Sink(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn console_sink_defaults_to_stdout() {
        assert_eq!(ConsoleSink::default(), ConsoleSink::Stdout);
    }
}
