use super::Sink;

/// Forwards every line as an INFO event to the installed `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write_line(&mut self, line: &str) -> crate::Result<()> {
        tracing::info!("{line}");
        Ok(())
    }
}
