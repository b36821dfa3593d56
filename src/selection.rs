//! The paths picked in the dialog, kept in the order it printed them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Path delimiter rewriting applied before printing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Slashes {
    /// Print paths exactly as the dialog wrote them
    #[default]
    Keep,
    /// Rewrite `\` to `/`
    Forward,
    /// Rewrite `/` to `\`
    Back,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    paths: Vec<String>,
}

impl Selection {
    /// Split raw dialog output into lines.
    ///
    /// A trailing `\r` is dropped from each line and a last line without a
    /// newline still counts. Invalid UTF-8 is replaced, never rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::default();
        }

        let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        let paths = body
            .split(|&byte| byte == b'\n')
            .map(|line| {
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                String::from_utf8_lossy(line).into_owned()
            })
            .collect();

        Self { paths }
    }

    pub fn normalize(self, slashes: Slashes) -> Self {
        let (from, to) = match slashes {
            Slashes::Keep => return self,
            Slashes::Forward => ('\\', "/"),
            Slashes::Back => ('/', "\\"),
        };
        let paths = self.paths.iter().map(|p| p.replace(from, to)).collect();
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[cfg(test)]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Write one path per line, in order.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for path in &self.paths {
            writeln!(out, "{path}")?;
        }
        out.flush()
    }
}
