//! Route `tracing` output and panics to the browser console

use std::io;
use tracing_subscriber::fmt::MakeWriter;

/// Buffers one formatted event and logs it when dropped
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Install the panic hook and the console subscriber. Safe to call twice.
pub fn init() {
    console_error_panic_hook::set_once();

    // No clock for timestamps in the browser
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    if installed.is_ok() {
        tracing::info!("console logging ready");
    }
}
