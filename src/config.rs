use clap::Parser;

/// Timestamp and print every line a grid meter emits over its serial port.
#[derive(Parser, Debug)]
#[clap(name = "gridmeter-logger", version, about)]
pub struct Cli {
    /// Serial port the meter is connected to (e.g. /dev/ttyUSB0 or COM3)
    pub port: String,

    /// Read timeout in seconds; accepted for compatibility, reads block
    /// until a full line arrives
    #[clap(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}
