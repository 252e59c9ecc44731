// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

pub use solver::count_easy_digits;

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Sub};
use std::convert::TryFrom;

use super::error::{Error, Result};
use super::util::numbered_lines;

pub const WIRES: &str = "abcdefg";
pub const UNIQUE_PATTERNS: usize = 10;
pub const OUTPUT_PATTERNS: usize = 4;

/// An unordered set of signal wires `a..g`, one bit per wire.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct SignalSet(u8);

impl SignalSet {
    pub const EMPTY: SignalSet = SignalSet(0);
    pub const ALL: SignalSet = SignalSet(0b111_1111);

    pub fn len(&self) -> usize { self.0.count_ones() as usize }
    pub fn is_superset(&self, other: SignalSet) -> bool {
        *self & other == other
    }
    pub fn wires(&self) -> impl Iterator<Item = char> + '_ {
        WIRES.chars()
             .enumerate()
             .filter(move |(i, _)| self.0 & (1 << i) != 0)
             .map(|(_, c)| c)
    }
}
impl TryFrom<&str> for SignalSet {
    type Error = String;
    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut bits = 0u8;
        for c in value.chars() {
            let i = WIRES.find(c).ok_or_else(|| format!("'{}' is not a signal wire", c))?;
            if bits & (1 << i) != 0 {
                return Err(format!("wire '{}' repeated in pattern '{}'", c, value));
            }
            bits |= 1 << i;
        }
        if bits == 0 {
            return Err(String::from("empty pattern"));
        }
        Ok(SignalSet(bits))
    }
}
impl BitAnd for SignalSet {
    type Output = SignalSet;
    fn bitand(self, rhs: SignalSet) -> SignalSet { SignalSet(self.0 & rhs.0) }
}
impl BitOr for SignalSet {
    type Output = SignalSet;
    fn bitor(self, rhs: SignalSet) -> SignalSet { SignalSet(self.0 | rhs.0) }
}
impl BitXor for SignalSet {
    type Output = SignalSet;
    fn bitxor(self, rhs: SignalSet) -> SignalSet { SignalSet(self.0 ^ rhs.0) }
}
impl Sub for SignalSet {
    type Output = SignalSet;
    fn sub(self, rhs: SignalSet) -> SignalSet { SignalSet(self.0 & !rhs.0) }
}
impl fmt::Display for SignalSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.wires().collect::<String>())
    }
}
impl fmt::Debug for SignalSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SignalSet({})", self)
    }
}

// ------------------------------------------------

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Entry {
    pub patterns: [SignalSet; UNIQUE_PATTERNS],
    pub outputs: [SignalSet; OUTPUT_PATTERNS],
}

impl Entry {
    pub fn patterns_of_len(&self, len: usize) -> Vec<SignalSet> {
        self.patterns.iter()
                     .copied()
                     .filter(|p| p.len() == len)
                     .collect()
    }
}
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let join = |sets: &[SignalSet]| sets.iter()
                                             .map(|s| s.to_string())
                                             .collect::<Vec<_>>()
                                             .join(" ");
        write!(f, "{} | {}", join(&self.patterns), join(&self.outputs))
    }
}

pub fn parse(input: &str) -> Result<Vec<Entry>> {
    numbered_lines(input).map(|(line_no, line)| parse_entry(line_no, line))
                         .collect()
}

fn parse_entry(line_no: usize, line: &str) -> Result<Entry> {
    let (patterns, outputs) = line.split_once('|')
                                  .ok_or_else(|| Error::input_format(line_no, "missing '|' separator"))?;
    let patterns = _parse_patterns::<UNIQUE_PATTERNS>(line_no, patterns, "unique patterns")?;
    let outputs = _parse_patterns::<OUTPUT_PATTERNS>(line_no, outputs, "output patterns")?;
    Ok(Entry { patterns, outputs })
}

fn _parse_patterns<const N: usize>(line_no: usize, s: &str, what: &str) -> Result<[SignalSet; N]> {
    let sets = s.split_whitespace()
                .map(|p| SignalSet::try_from(p).map_err(|msg| Error::input_format(line_no, msg)))
                .collect::<Result<Vec<_>>>()?;
    let found = sets.len();
    <[SignalSet; N]>::try_from(sets).map_err(|_| Error::input_format(line_no, format!(
        "expected {} {}, found {}", N, what, found)))
}
