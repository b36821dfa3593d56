//! Dialog invocation: which program to run and with which arguments.
//!
//! The dialog takes its settings as `key=value` words and prints the
//! selected paths on stdout when started with `stdout=True`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// Built-in location of the dialog executable.
pub const DEFAULT_PROGRAM: &str = if cfg!(windows) {
    "C:/Programming/Python/Projects/Ufd/dist/Ufd/ufd.exe"
} else {
    "/usr/local/bin/ufd"
};

/// Optional dialog settings. Unset fields are left to the dialog's own
/// defaults and are not passed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiselect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_dirs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unix_delimiter: Option<bool>,
}

impl DialogOptions {
    /// Render as dialog arguments, `stdout=True` always first.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![format!("stdout={}", py_bool(true))];

        let texts = [("title", &self.title), ("icon", &self.icon)];
        for (key, value) in texts {
            if let Some(value) = value {
                args.push(format!("{key}={value}"));
            }
        }

        let switches = [
            ("show_hidden", self.show_hidden),
            ("include_files", self.include_files),
            ("multiselect", self.multiselect),
            ("select_dirs", self.select_dirs),
            ("select_files", self.select_files),
            ("unix_delimiter", self.unix_delimiter),
        ];
        for (key, value) in switches {
            if let Some(value) = value {
                args.push(format!("{key}={}", py_bool(value)));
            }
        }

        args
    }
}

/// The dialog reads booleans with Python-style spelling.
fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// A fully resolved dialog command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl DialogInvocation {
    pub fn new(program: PathBuf, options: &DialogOptions) -> Self {
        Self {
            program,
            args: options.to_args(),
        }
    }

    /// Command for spawning the dialog directly, without a shell.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// One shell line running the dialog with stdout redirected to `target`.
    pub fn shell_line(&self, target: &str) -> String {
        let mut words = Vec::with_capacity(self.args.len() + 1);
        words.push(shell_quote(&self.program.to_string_lossy()));
        words.extend(self.args.iter().map(|arg| shell_quote(arg)));
        format!("{} > {}", words.join(" "), shell_quote(target))
    }
}

impl fmt::Display for DialogInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(not(windows))]
use sh_quote as shell_quote;

#[cfg(windows)]
use cmd_quote as shell_quote;

#[cfg_attr(windows, allow(dead_code))]
fn sh_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// `cmd` has no escape for `"` inside a quoted word. Windows paths cannot
/// contain one, so it is dropped.
#[cfg_attr(not(windows), allow(dead_code))]
fn cmd_quote(word: &str) -> String {
    format!("\"{}\"", word.replace('"', ""))
}
