//! Output Emitter
//!
//! Abstraction for where rendered text goes.

/// Sink for rendered text.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a single space.
    fn emit_space(&mut self);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);
}

/// String-based emitter for in-memory rendering.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }
}
