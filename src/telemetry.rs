use crate::{Error, Result, config::LogsConfig};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. Fails if one is already set.
pub fn init(logs: &LogsConfig) -> Result<()> {
    crate::config::validate_log_level(&logs.level)?;

    let filter = EnvFilter::try_new(&logs.level)
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", logs.level, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .json();

    #[cfg(target_arch = "wasm32")]
    let builder = builder.with_writer(console::ConsoleMakeWriter);

    builder
        .try_init()
        .map_err(|e| Error::config(format!("Failed to install tracing subscriber: {}", e)))
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;

    /// Writes each formatted event to `console.log`.
    pub struct ConsoleMakeWriter;

    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if !self.buffer.is_empty() {
                let line = String::from_utf8_lossy(&self.buffer);
                web_sys::console::log_1(&line.trim_end().into());
                self.buffer.clear();
            }
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buffer: Vec::new() }
        }
    }
}
