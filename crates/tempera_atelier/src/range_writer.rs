//! A writer that tracks output positions.
//!
//! Every write advances a cursor (line, column, byte offset) and returns the
//! half-open range it produced, which is what the source map records. String
//! literals destined for the render buffer go through
//! [`RangeWriter::write_string_literal`], which also keeps the raw text in
//! the `literals` digest used for change detection.

use core::fmt::Write as _;

use memchr::{memchr_iter, memrchr};
use tempera_carton::String;
use tempera_relief::{Position, Range};

use crate::errors::Result;

/// Wraps a byte sink, tracking the cursor and recording emitted literals.
pub struct RangeWriter<W> {
    w: W,
    /// Cursor after everything written so far.
    pub current: Position,
    literal_index: usize,
    /// Raw text of every string literal emitted, in emission order.
    pub literals: Vec<String>,
}

impl<W: std::io::Write> RangeWriter<W> {
    pub fn new(w: W) -> Self {
        Self {
            w,
            current: Position::default(),
            literal_index: 0,
            literals: Vec::new(),
        }
    }

    /// Append `s` to the sink and return the range it occupies.
    pub fn write(&mut self, s: &str) -> Result<Range> {
        let from = self.current;
        self.w.write_all(s.as_bytes())?;
        self.advance(s);
        Ok(Range::new(from, self.current))
    }

    /// Write `level` tab characters, then `s`. The returned range covers the
    /// indentation and the text.
    pub fn write_indent(&mut self, level: u32, s: &str) -> Result<Range> {
        let from = self.current;
        for _ in 0..level {
            self.write("\t")?;
        }
        let r = self.write(s)?;
        Ok(Range::new(from, r.to))
    }

    /// Emit the Go statement that writes `s` to the per-render buffer at
    /// runtime, and record `s` in the literals digest.
    ///
    /// One statement is emitted per call; the 1-based literal index lets the
    /// runtime substitute updated literals without recompiling.
    pub fn write_string_literal(&mut self, level: u32, s: &str) -> Result<Range> {
        let from = self.current;
        self.literal_index += 1;
        self.write_indent(
            level,
            &format!(
                "templ_7745c5c3_Err = templruntime.WriteString(templ_7745c5c3_Buffer, {}, \"{}\")\n",
                self.literal_index,
                go_escape(s)
            ),
        )?;
        self.write_indent(level, "if templ_7745c5c3_Err != nil {\n")?;
        self.write_indent(level + 1, "return templ_7745c5c3_Err\n")?;
        self.write_indent(level, "}\n")?;
        self.literals.push(s.into());
        Ok(Range::new(from, self.current))
    }

    pub fn into_literals(self) -> Vec<String> {
        self.literals
    }

    fn advance(&mut self, s: &str) {
        let bytes = s.as_bytes();
        self.current.index += bytes.len() as u32;
        if let Some(last_newline) = memrchr(b'\n', bytes) {
            self.current.line += memchr_iter(b'\n', bytes).count() as u32;
            self.current.col = (bytes.len() - last_newline - 1) as u32;
        } else {
            self.current.col += bytes.len() as u32;
        }
    }
}

/// Escape `s` for inclusion in a double-quoted Go string literal.
pub(crate) fn go_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
