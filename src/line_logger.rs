use crate::error::LoggerError;
use crate::log_record::LogRecord;
use chrono::Local;
use log::info;
use std::io::Write;
use std::str;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_serial::SerialPortBuilderExt;

/// The meter always talks at 9600 baud.
pub const BAUD_RATE: u32 = 9600;

/// Opens the serial port and prints a timestamped record for every line the
/// meter sends, until the connection fails or the process is killed. The port
/// is released by drop on every exit path.
pub async fn run(port_path: &str) -> Result<(), LoggerError> {
    let port = tokio_serial::new(port_path, BAUD_RATE).open_native_async()?;

    info!("Connected to serial port {} at {} baud", port_path, BAUD_RATE);

    let mut reader = BufReader::new(port);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    read_lines(&mut reader, &mut out).await
}

async fn read_lines<R, W>(reader: &mut R, out: &mut W) -> Result<(), LoggerError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut line_buffer = Vec::new();

    loop {
        line_buffer.clear();
        let n = reader.read_until(b'\n', &mut line_buffer).await?;
        if n == 0 {
            // EOF - connection closed
            info!("Serial connection closed");
            return Ok(());
        }

        let text = str::from_utf8(&line_buffer)?;
        let record = LogRecord::new(Local::now(), text);
        writeln!(out, "{}", record)?;
    }
}
