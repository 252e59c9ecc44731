// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use log::{debug, trace};

use super::{Entry, SignalSet};
use super::super::error::{Error, Result};

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Segment {
    Top,
    TopLeft,
    TopRight,
    Middle,
    BottomLeft,
    BottomRight,
    Bottom,
}
use self::Segment::*;

impl Segment {
    pub const ALL: [Segment; 7] = [Top, TopLeft, TopRight, Middle, BottomLeft, BottomRight, Bottom];
}
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Top         => "top",
            TopLeft     => "top left",
            TopRight    => "top right",
            Middle      => "middle",
            BottomLeft  => "bottom left",
            BottomRight => "bottom right",
            Bottom      => "bottom",
        })
    }
}

/// Lit segments of each canonical digit, indexed by digit value.
const DIGITS: [&[Segment]; 10] = [
    &[Top, TopLeft, TopRight, BottomLeft, BottomRight, Bottom],
    &[TopRight, BottomRight],
    &[Top, TopRight, Middle, BottomLeft, Bottom],
    &[Top, TopRight, Middle, BottomRight, Bottom],
    &[TopLeft, TopRight, Middle, BottomRight],
    &[Top, TopLeft, Middle, BottomRight, Bottom],
    &[Top, TopLeft, Middle, BottomLeft, BottomRight, Bottom],
    &[Top, TopRight, BottomRight],
    &[Top, TopLeft, TopRight, Middle, BottomLeft, BottomRight, Bottom],
    &[Top, TopLeft, TopRight, Middle, BottomRight, Bottom],
];

pub const EASY_DIGIT_LENGTHS: [usize; 4] = [2, 3, 4, 7]; // digits 1, 7, 4, 8

/// Which scrambled wire drives each segment of one display.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Wiring {
    wires: [SignalSet; 7],
}

impl Wiring {
    pub fn deduce(entry: &Entry) -> Result<Self> {
        Self::_check_length_classes(entry)?;

        let one   = Self::_unique(entry, 2)?;
        let seven = Self::_unique(entry, 3)?;
        let four  = Self::_unique(entry, 4)?;
        let eight = Self::_unique(entry, 7)?;

        let top = seven ^ one;
        let top_left_and_middle = four ^ one;

        // 2, 3 and 5 all light top, middle and bottom
        let common = entry.patterns_of_len(5)
                          .into_iter()
                          .fold(SignalSet::ALL, |acc, p| acc & p);
        let middle = top_left_and_middle & common;
        let bottom = common - top - middle;
        let top_left = top_left_and_middle - middle;

        // of 0, 6 and 9, only 6 lacks part of 1
        let sixes = entry.patterns_of_len(6)
                         .into_iter()
                         .filter(|p| !p.is_superset(one))
                         .collect::<Vec<_>>();
        if sixes.len() != 1 {
            return Err(Error::DecodeAmbiguity(format!(
                "{} six-wire patterns lack part of '{}', expected exactly one", sixes.len(), one)));
        }
        let bottom_right = sixes[0] & one;
        let top_right = one - bottom_right;
        let bottom_left = eight - (top | top_left | top_right | middle | bottom_right | bottom);

        let wiring = Wiring {
            wires: [top, top_left, top_right, middle, bottom_left, bottom_right, bottom],
        };
        for segment in Segment::ALL.iter() {
            let wire = wiring.wire(*segment);
            if wire.len() != 1 {
                return Err(Error::DecodeAmbiguity(format!(
                    "{} segment resolved to {} wires '{}'", segment, wire.len(), wire)));
            }
        }
        trace!("deduced wiring {}", wiring);
        Ok(wiring)
    }

    pub fn wire(&self, segment: Segment) -> SignalSet {
        self.wires[segment as usize]
    }

    pub fn pattern_for(&self, digit: usize) -> SignalSet {
        DIGITS[digit].iter()
                     .fold(SignalSet::EMPTY, |acc, &s| acc | self.wire(s))
    }

    pub fn digit_for(&self, pattern: SignalSet) -> Option<u8> {
        (0..DIGITS.len()).find(|&d| self.pattern_for(d) == pattern)
                         .map(|d| d as u8)
    }

    pub fn read_outputs(&self, entry: &Entry) -> Result<u64> {
        entry.outputs.iter().try_fold(0u64, |acc, &pattern| {
            let digit = self.digit_for(pattern)
                            .ok_or_else(|| Error::DecodeAmbiguity(format!("output pattern '{}' matches no digit", pattern)))?;
            Ok(acc * 10 + u64::from(digit))
        })
    }

    fn _check_length_classes(entry: &Entry) -> Result<()> {
        for &(len, expected) in &[(2, 1), (3, 1), (4, 1), (5, 3), (6, 3), (7, 1)] {
            let found = entry.patterns_of_len(len).len();
            if found != expected {
                return Err(Error::DecodeAmbiguity(format!(
                    "found {} patterns of length {}, expected {}", found, len, expected)));
            }
        }
        Ok(())
    }

    fn _unique(entry: &Entry, len: usize) -> Result<SignalSet> {
        match entry.patterns_of_len(len).as_slice() {
            [p] => Ok(*p),
            ps  => Err(Error::DecodeAmbiguity(format!(
                       "found {} patterns of length {}, expected one", ps.len(), len))),
        }
    }
}
impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts = Segment::ALL.iter()
                                .map(|&s| format!("{}={}", s, self.wire(s)))
                                .collect::<Vec<_>>();
        write!(f, "{}", parts.join(", "))
    }
}

impl Entry {
    pub fn decode(&self) -> Result<u64> {
        let value = Wiring::deduce(self)?.read_outputs(self)?;
        debug!("{} => {}", self, value);
        Ok(value)
    }
}

/// Output patterns identifiable from their length alone.
pub fn count_easy_digits(entries: &[Entry]) -> usize {
    entries.iter()
           .flat_map(|e| e.outputs.iter())
           .filter(|p| EASY_DIGIT_LENGTHS.contains(&p.len()))
           .count()
}
