//! Output sink: where `,` and `.` send their characters.

/// Receives the character stream produced by output instructions.
///
/// The machine needs exactly one operation — emit a single character.
/// Binding the stream to stdout, a file, or a buffer is the caller's
/// concern.
pub trait OutputSink {
    fn emit(&mut self, ch: char);
}

/// Collects output in memory.
impl OutputSink for String {
    fn emit(&mut self, ch: char) {
        self.push(ch);
    }
}

/// Discards all output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _ch: char) {}
}
