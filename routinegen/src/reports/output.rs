//! Where reports are rendered.

/// Which stream a rendered line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Target output for reports.
///
/// Reports call the semantic methods; each one formats a line and hands it
/// to [`Output::write_line`], the only method an implementation must supply.
pub trait Output {
    fn write_line(&mut self, stream: Stream, line: String);

    fn section(&mut self, name: &str) {
        self.write_line(Stream::Stdout, format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.write_line(Stream::Stdout, format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.write_line(Stream::Stdout, format!("  - {}", text));
    }

    /// A file that was written.
    fn added_item(&mut self, text: &str) {
        self.write_line(Stream::Stdout, format!("  + {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.write_line(Stream::Stderr, format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.write_line(Stream::Stdout, format!("── {} ──", label));
    }

    /// Generated code, printed as-is.
    fn preformatted(&mut self, text: &str) {
        self.write_line(Stream::Stdout, text.to_string());
    }

    fn newline(&mut self) {
        self.write_line(Stream::Stdout, String::new());
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to the process stdout and stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write_line(&mut self, stream: Stream, line: String) {
        match stream {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }
    }
}

/// Collects rendered lines from both streams in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn write_line(&mut self, _stream: Stream, line: String) {
        self.lines.push(line);
    }
}
