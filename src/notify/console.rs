//! Console notifier

use async_trait::async_trait;

use crate::monitor::report::Report;
use crate::notify::render::render_plain;
use crate::notify::{Notifier, NotifyError};

/// Prints the report to standard output.
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn deliver(&self, report: &Report) -> Result<(), NotifyError> {
        println!("{}", render_plain(report));
        Ok(())
    }
}
