//! Turns raw bytes into process records, and the quantum argument into a
//! tick count. Integers are runs of ASCII digits; any other byte separates
//! them. The first integer is the process count, followed by that many
//! `(pid, arrival, burst)` triples in file order.

use crate::core::state::{Process, Ticks};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// errno for invalid arguments; the exit code for every malformed-input
/// condition.
pub const EINVAL: i32 = 22;

#[derive(Debug)]
pub enum InputError {
    /// Ran out of data while an integer was still expected.
    UnexpectedEof,
    /// A digit run does not fit in 64 bits.
    IntegerOverflow,
    /// Quantum argument contains something other than ASCII digits.
    MalformedQuantum,
    /// Quantum parsed as 0, which would never finish a process.
    ZeroQuantum,
    Io(io::Error),
}

impl InputError {
    /// Process exit code for this failure: the OS errno for I/O failures,
    /// EINVAL for everything malformed.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(err) => err.raw_os_error().unwrap_or(1),
            _ => EINVAL,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => {
                write!(f, "reached end of file while looking for another integer")
            }
            Self::IntegerOverflow => write!(f, "integer constant too large"),
            Self::MalformedQuantum => write!(f, "quantum must be a string of ASCII digits"),
            Self::ZeroQuantum => write!(f, "quantum must be at least 1"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

struct IntScanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> IntScanner<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next integer in the stream. Skips any run of separator bytes first;
    /// a digit run terminated by end-of-data still counts.
    fn next_int(&mut self) -> Result<u64, InputError> {
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == self.data.len() {
            return Err(InputError::UnexpectedEof);
        }

        let mut value: u64 = 0;
        while let Some(&byte) = self.data.get(self.pos) {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(byte - b'0')))
                .ok_or(InputError::IntegerOverflow)?;
            self.pos += 1;
        }
        Ok(value)
    }
}

/// Parse a count-prefixed workload out of raw file bytes.
pub fn parse_workload(data: &[u8]) -> Result<Vec<Process>, InputError> {
    let mut scanner = IntScanner::new(data);
    let count = scanner.next_int()?;

    // The count is untrusted until the triples actually arrive; cap the
    // preallocation.
    let mut procs = Vec::with_capacity(count.min(1024) as usize);
    for _ in 0..count {
        let pid = scanner.next_int()?;
        let arrival_time = scanner.next_int()?;
        let burst_time = scanner.next_int()?;
        procs.push(Process::new(pid, arrival_time, burst_time));
    }
    Ok(procs)
}

pub fn load_workload(path: &Path) -> Result<Vec<Process>, InputError> {
    let data = fs::read(path)?;
    parse_workload(&data)
}

/// Strict parse of the quantum CLI argument: digits only, no sign, no
/// whitespace, and never zero.
pub fn parse_quantum(arg: &str) -> Result<Ticks, InputError> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::MalformedQuantum);
    }

    let mut value: Ticks = 0;
    for byte in arg.bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(byte - b'0')))
            .ok_or(InputError::IntegerOverflow)?;
    }
    if value == 0 {
        return Err(InputError::ZeroQuantum);
    }
    Ok(value)
}
