use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// which stream a message goes to, and how it's coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Status,
    Warning,
    Error,
}

impl Level {
    fn paint(self, message: &str) -> ColoredString {
        match self {
            Self::Info => message.normal(),
            Self::Status => message.green(),
            Self::Warning => message.yellow(),
            Self::Error => message.red(),
        }
    }
}

/// write one line; output errors are ignored (closed pipe etc)
pub fn emit(level: Level, message: &str) {
    let line = level.paint(message);
    let _ = match level {
        Level::Info | Level::Status => writeln!(io::stdout(), "{line}"),
        Level::Warning | Level::Error => writeln!(io::stderr(), "{line}"),
    };
}

#[macro_export]
macro_rules! info {
    () => {
        $crate::ui::emit($crate::ui::Level::Info, "")
    };
    ($fmt:literal $(, $($arg:tt)*)?) => {
        $crate::ui::emit($crate::ui::Level::Info, &format!($fmt $(, $($arg)*)?))
    };
    ($expr:expr) => {
        $crate::ui::emit($crate::ui::Level::Info, &format!("{}", $expr))
    };
}

#[macro_export]
macro_rules! status {
    ($fmt:literal $(, $($arg:tt)*)?) => {
        $crate::ui::emit($crate::ui::Level::Status, &format!($fmt $(, $($arg)*)?))
    };
    ($expr:expr) => {
        $crate::ui::emit($crate::ui::Level::Status, &format!("{}", $expr))
    };
}

#[macro_export]
macro_rules! warning {
    ($fmt:literal $(, $($arg:tt)*)?) => {
        $crate::ui::emit($crate::ui::Level::Warning, &format!($fmt $(, $($arg)*)?))
    };
    ($expr:expr) => {
        $crate::ui::emit($crate::ui::Level::Warning, &format!("{}", $expr))
    };
}

#[macro_export]
macro_rules! error {
    ($fmt:literal $(, $($arg:tt)*)?) => {
        $crate::ui::emit($crate::ui::Level::Error, &format!($fmt $(, $($arg)*)?))
    };
    ($expr:expr) => {
        $crate::ui::emit($crate::ui::Level::Error, &format!("{}", $expr))
    };
}
