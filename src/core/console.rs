//! Leveled terminal logging.
//!
//! Lines look like `[INFO] Checking ...`, colored by level. In JSON mode the
//! log goes to stderr so stdout carries only the report.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Ok,
    Info,
}

impl Level {
    fn tag(self) -> String {
        let tag = match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Ok => "[OK]",
            Self::Info => "[INFO]",
        };
        match self {
            Self::Error => tag.bright_red().to_string(),
            Self::Warn => tag.bright_yellow().to_string(),
            Self::Ok => tag.bright_green().to_string(),
            Self::Info => tag.bright_blue().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    Stderr,
    Silent,
}

#[derive(Debug, Clone, Copy)]
pub struct Console {
    sink: Sink,
    trace: bool,
}

impl Console {
    pub fn new(sink: Sink) -> Self {
        Self {
            sink,
            trace: std::env::var("PUSHGATE_TRACE").ok().as_deref() == Some("1"),
        }
    }

    pub fn silent() -> Self {
        Self {
            sink: Sink::Silent,
            trace: false,
        }
    }

    pub fn line(&self, text: &str) {
        match self.sink {
            Sink::Stdout => println!("{}", text),
            Sink::Stderr => eprintln!("{}", text),
            Sink::Silent => {}
        }
    }

    pub fn log(&self, level: Level, message: &str) {
        if self.sink == Sink::Silent {
            return;
        }
        self.line(&format!("{} {}", level.tag(), message));
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn ok(&self, message: &str) {
        self.log(Level::Ok, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Indented sample line shown under a check, outside the finding record.
    pub fn violation(&self, sample: &str) {
        if self.sink == Sink::Silent {
            return;
        }
        self.line(&format!("    {} {}", "Violation:".bright_yellow(), sample));
    }

    pub fn trace_check(&self, name: &str) {
        if self.trace {
            self.line(&format!("pushgate: trace {}", name));
        }
    }
}
