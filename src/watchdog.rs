//! Wall-clock watchdog that force-terminates the process at its deadline.

use std::process;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use tracing::trace;

/// Exit status used when the deadline fires, distinct from input errors.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Message printed to stderr when the deadline fires.
pub const TIMEOUT_MESSAGE: &str = "Timeout alcanzado";

/// Arm a watchdog that terminates the process once `timeout` has elapsed.
///
/// The timer runs on a detached thread so it fires even while the main
/// thread is blocked reading stdin. There is no disarm: on a normal run the
/// process exits before the deadline and the thread dies with it.
pub fn arm(timeout: Duration) {
    trace!(?timeout, "arming watchdog");
    thread::spawn(move || {
        thread::sleep(timeout);
        eprintln!("{}", TIMEOUT_MESSAGE.red().bold());
        process::exit(TIMEOUT_EXIT_CODE);
    });
}
