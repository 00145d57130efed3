//! Showcase of the console logger
//!
//! Produces output like (timestamps vary):
//!
//! ```text
//! INFO  2020-12-14T12:18:40.3551830-05:00 > The default log level is INFO
//! ERROR 2020-12-14T12:18:40.3922810-05:00 > This is an error
//! TRACE 2020-12-14T12:18:40.3924310-05:00 > (showcase.rs:23) I just set the loglevel to trace!
//! INFO  2020-12-14T12:18:40.3925130-05:00 \ (showcase.rs:24) Messages can be split over
//! INFO  2020-12-14T12:18:40.3925130-05:00 / (showcase.rs:24) multiple lines.
//! ...
//! ```
//!
//! Run with: cargo run --example showcase

use log_console::{error, info, log, trace, LogLevel};

fn main() {
    info!("The default log level is {}", log_console::get_log_level());
    error!("This is an error");
    trace!("By default, trace is not shown!");
    log_console::set_log_level(LogLevel::Trace);
    trace!("I just set the loglevel to trace!");
    info!("Messages can be split over\nmultiple lines.");
    info!(
        "Log messages can\neven be split\nover a large number of lines.\nThe log level, the timestamp,\nand the source code location\nis still added, so that the message always\nstarts in the same column."
    );
    log_console::set_log_level(LogLevel::Info);
    info!("Logging is performed by calling info!(), warn!() and friends,");
    log!(LogLevel::Info, "or by explicitly stating the log level in log!().");
}
