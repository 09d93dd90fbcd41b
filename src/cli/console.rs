use mockall::automock;

/// Sink for handler-visible output lines.
///
/// Handlers never write to stdout directly; going through this trait
/// keeps the output assertable in tests.
#[automock]
pub trait Console: Send + Sync {
    /// Write one newline-terminated line to the sink.
    fn print_line(&self, line: &str);
}

/// Production console writing to the process standard output.
#[derive(Debug, Clone, Default)]
pub struct StandardConsole;

impl StandardConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StandardConsole {
    fn print_line(&self, line: &str) {
        println!("{line}");
    }
}
