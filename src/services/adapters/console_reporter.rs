use crate::ports::ReporterPort;

/// Prints progress lines to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReporterPort for ConsoleReporter {
    fn step(&self, message: &str) {
        println!("→ {}", message);
    }

    fn success(&self, message: &str) {
        println!("✅ {}", message);
    }

    fn info(&self, message: &str) {
        println!("ℹ️  {}", message);
    }

    fn warn(&self, message: &str) {
        println!("⚠️  {}", message);
    }

    fn error(&self, message: &str) {
        println!("❌ {}", message);
    }

    fn detail(&self, message: &str) {
        println!("   {}", message);
    }
}
