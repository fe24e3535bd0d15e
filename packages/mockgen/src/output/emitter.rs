//! Emitter Module
//!
//! Append-only line buffer with indentation tracking used to write the
//! generated Go source.

const INDENT_WITH: &str = "\t";

#[derive(Debug, Clone)]
struct EmittedLine {
    parts: Vec<String>,
    indent: usize,
}

impl EmittedLine {
    fn new(indent: usize) -> Self {
        EmittedLine {
            parts: Vec::new(),
            indent,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Emitter {
    lines: Vec<EmittedLine>,
    indent: usize,
}

impl Default for Emitter {
    fn default() -> Self {
        Emitter::create_root()
    }
}

impl Emitter {
    pub fn create_root() -> Self {
        Emitter::new(0)
    }

    pub fn new(indent: usize) -> Self {
        Emitter {
            lines: vec![EmittedLine::new(indent)],
            indent,
        }
    }

    fn current_line(&self) -> &EmittedLine {
        // `lines` always holds the line being written
        &self.lines[self.lines.len() - 1]
    }

    fn current_line_mut(&mut self) -> &mut EmittedLine {
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    pub fn print(&mut self, part: &str, new_line: bool) {
        if !part.is_empty() {
            self.current_line_mut().parts.push(part.to_string());
        }
        if new_line {
            self.lines.push(EmittedLine::new(self.indent));
        }
    }

    pub fn println(&mut self, last_part: &str) {
        self.print(last_part, true);
    }

    pub fn blank_line(&mut self) {
        self.print("", true);
    }

    pub fn line_is_empty(&self) -> bool {
        self.current_line().parts.is_empty()
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn inc_indent(&mut self) {
        self.indent += 1;
        if self.line_is_empty() {
            self.current_line_mut().indent = self.indent;
        }
    }

    pub fn dec_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        if self.line_is_empty() {
            self.current_line_mut().indent = self.indent;
        }
    }

    /// Runs `f` one level deeper; the level is restored when `f` returns.
    pub fn indented<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.inc_indent();
        let result = f(self);
        self.dec_indent();
        result
    }

    /// `header`, the indented body written by `f`, then `footer`.
    pub fn block<R>(&mut self, header: &str, footer: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.println(header);
        let result = self.indented(f);
        self.println(footer);
        result
    }

    pub fn to_source(&self) -> String {
        self.lines
            .iter()
            .map(|l| {
                if !l.parts.is_empty() {
                    format!("{}{}", INDENT_WITH.repeat(l.indent), l.parts.join(""))
                } else {
                    String::new()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
