//! Console I/O for the built-ins.
//!
//! `print`, `input` and `clear` never touch the terminal directly. They go
//! through an [`IoHandlerImpl`], which is either the real console or an
//! in-memory buffer that tests script and inspect.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Reads stdin and writes stdout.
#[derive(Default)]
pub struct StdioHandler;

impl StdioHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// One line from stdin without its line terminator, or `None` at end of
    /// input or on a read error.
    pub fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Some(line)
            }
        }
    }

    pub fn clear_screen(&self) {
        let mut out = io::stdout().lock();
        // A terminal that went away is not the program's problem.
        let _ = out.write_all(CLEAR_SCREEN.as_bytes());
        let _ = out.flush();
    }
}

/// Captures output in memory and serves input from a queue of lines.
pub struct BufferHandler {
    output: Mutex<String>,
    input: Mutex<VecDeque<String>>,
}

impl BufferHandler {
    pub fn new() -> Self {
        BufferHandler {
            output: Mutex::new(String::new()),
            input: Mutex::new(VecDeque::new()),
        }
    }

    /// A handler whose `read_line` returns `lines` in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferHandler {
            output: Mutex::new(String::new()),
            input: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.output.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn read_line(&self) -> Option<String> {
        self.input.lock().pop_front()
    }

    /// Clearing the "screen" discards everything printed so far.
    pub fn clear_screen(&self) {
        self.output.lock().clear();
    }

    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }
}

impl Default for BufferHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// I/O handler, dispatched by enum.
pub enum IoHandlerImpl {
    Stdio(StdioHandler),
    Buffer(BufferHandler),
}

impl IoHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdio(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    pub fn read_line(&self) -> Option<String> {
        match self {
            Self::Stdio(h) => h.read_line(),
            Self::Buffer(h) => h.read_line(),
        }
    }

    pub fn clear_screen(&self) {
        match self {
            Self::Stdio(h) => h.clear_screen(),
            Self::Buffer(h) => h.clear_screen(),
        }
    }

    /// Everything printed so far. Always empty for the console.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdio(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }
}

pub type SharedIoHandler = Arc<IoHandlerImpl>;

pub fn stdio_handler() -> SharedIoHandler {
    Arc::new(IoHandlerImpl::Stdio(StdioHandler))
}

pub fn buffer_handler() -> SharedIoHandler {
    Arc::new(IoHandlerImpl::Buffer(BufferHandler::new()))
}

/// A buffer handler with `lines` queued for `input()`.
pub fn scripted_handler<I, S>(lines: I) -> SharedIoHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(IoHandlerImpl::Buffer(BufferHandler::with_input(lines)))
}
