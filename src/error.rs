use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("serial port error: {0}")]
    SerialError(#[from] tokio_serial::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("line is not valid UTF-8: {0}")]
    DecodeError(#[from] std::str::Utf8Error),
}
