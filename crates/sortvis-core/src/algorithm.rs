#![forbid(unsafe_code)]

//! Declared algorithm identifiers and the alias table.
//!
//! Twenty-one identifiers can be selected, but only six have their own step
//! generator. Every other identifier is an alias: its run produces exactly
//! the step sequence of the canonical algorithm it maps to.
//!
//! | Identifier | Canonical |
//! |---|---|
//! | `bubble`, `selection`, `insertion`, `merge`, `quick`, `heap` | themselves |
//! | `tim` | `merge` |
//! | `counting`, `radix`, `bucket`, `shell`, `comb`, `pigeonhole`, `cycle`, `strand`, `bitonic`, `pancake`, `bogo`, `gnome`, `stooge`, `oddeven` | `bubble` |

use std::fmt;
use std::str::FromStr;

/// Algorithms that own a step generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Canonical {
    /// Adjacent swaps across `n` full passes.
    Bubble,
    /// Minimum of the unsorted suffix swapped to its front.
    Selection,
    /// Key shifted back through the sorted prefix.
    Insertion,
    /// Top-down merge with runs merged in place.
    Merge,
    /// Lomuto partition around the last element.
    Quick,
    /// Max-heap built in place, then drained to the back.
    Heap,
}

impl Canonical {
    /// Every implementation, in menu order.
    pub const ALL: [Canonical; 6] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
    ];

    /// The identifier that selects this implementation directly.
    #[must_use]
    pub const fn algorithm(self) -> AlgorithmId {
        match self {
            Self::Bubble => AlgorithmId::Bubble,
            Self::Selection => AlgorithmId::Selection,
            Self::Insertion => AlgorithmId::Insertion,
            Self::Merge => AlgorithmId::Merge,
            Self::Quick => AlgorithmId::Quick,
            Self::Heap => AlgorithmId::Heap,
        }
    }
}

/// A selectable algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlgorithmId {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Bucket,
    Shell,
    Tim,
    Comb,
    Pigeonhole,
    Cycle,
    Strand,
    Bitonic,
    Pancake,
    Bogo,
    Gnome,
    Stooge,
    OddEven,
}

impl AlgorithmId {
    /// Every declared identifier, in menu order.
    pub const ALL: [AlgorithmId; 21] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Counting,
        Self::Radix,
        Self::Bucket,
        Self::Shell,
        Self::Tim,
        Self::Comb,
        Self::Pigeonhole,
        Self::Cycle,
        Self::Strand,
        Self::Bitonic,
        Self::Pancake,
        Self::Bogo,
        Self::Gnome,
        Self::Stooge,
        Self::OddEven,
    ];

    /// The implementation that generates this identifier's steps.
    ///
    /// `Tim` is an alias of merge sort; the remaining non-canonical
    /// identifiers are aliases of bubble sort.
    #[must_use]
    pub const fn canonical(self) -> Canonical {
        match self {
            Self::Bubble => Canonical::Bubble,
            Self::Selection => Canonical::Selection,
            Self::Insertion => Canonical::Insertion,
            Self::Merge | Self::Tim => Canonical::Merge,
            Self::Quick => Canonical::Quick,
            Self::Heap => Canonical::Heap,
            Self::Counting
            | Self::Radix
            | Self::Bucket
            | Self::Shell
            | Self::Comb
            | Self::Pigeonhole
            | Self::Cycle
            | Self::Strand
            | Self::Bitonic
            | Self::Pancake
            | Self::Bogo
            | Self::Gnome
            | Self::Stooge
            | Self::OddEven => Canonical::Bubble,
        }
    }

    /// Whether this identifier borrows another algorithm's step sequence.
    #[must_use]
    pub const fn is_alias(self) -> bool {
        !matches!(
            self,
            Self::Bubble | Self::Selection | Self::Insertion | Self::Merge | Self::Quick | Self::Heap
        )
    }

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::Bucket => "bucket",
            Self::Shell => "shell",
            Self::Tim => "tim",
            Self::Comb => "comb",
            Self::Pigeonhole => "pigeonhole",
            Self::Cycle => "cycle",
            Self::Strand => "strand",
            Self::Bitonic => "bitonic",
            Self::Pancake => "pancake",
            Self::Bogo => "bogo",
            Self::Gnome => "gnome",
            Self::Stooge => "stooge",
            Self::OddEven => "oddeven",
        }
    }

    /// Name shown in panel titles.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
            Self::Counting => "Counting Sort",
            Self::Radix => "Radix Sort",
            Self::Bucket => "Bucket Sort",
            Self::Shell => "Shell Sort",
            Self::Tim => "Tim Sort",
            Self::Comb => "Comb Sort",
            Self::Pigeonhole => "Pigeonhole Sort",
            Self::Cycle => "Cycle Sort",
            Self::Strand => "Strand Sort",
            Self::Bitonic => "Bitonic Sort",
            Self::Pancake => "Pancake Sort",
            Self::Bogo => "Bogo Sort",
            Self::Gnome => "Gnome Sort",
            Self::Stooge => "Stooge Sort",
            Self::OddEven => "Odd-Even Sort",
        }
    }

    /// Resolve a name, falling back to [`AlgorithmId::Bubble`] when unknown.
    ///
    /// Used wherever an animation must always be producible.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        match name.parse() {
            Ok(id) => id,
            Err(_) => {
                crate::warn!(requested = name, "unknown algorithm id, falling back to bubble");
                Self::Bubble
            }
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned by the strict [`FromStr`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    name: String,
}

impl ParseAlgorithmError {
    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {:?}", self.name)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for AlgorithmId {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let key = match normalized.as_str() {
            "odd-even" | "odd_even" => "oddeven",
            other => other,
        };
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.id() == key)
            .ok_or_else(|| ParseAlgorithmError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_canonical_identifiers() {
        let canonical: Vec<AlgorithmId> = AlgorithmId::ALL
            .iter()
            .copied()
            .filter(|id| !id.is_alias())
            .collect();
        assert_eq!(
            canonical,
            vec![
                AlgorithmId::Bubble,
                AlgorithmId::Selection,
                AlgorithmId::Insertion,
                AlgorithmId::Merge,
                AlgorithmId::Quick,
                AlgorithmId::Heap,
            ]
        );
    }

    #[test]
    fn tim_is_merge_alias() {
        assert!(AlgorithmId::Tim.is_alias());
        assert_eq!(AlgorithmId::Tim.canonical(), Canonical::Merge);
    }

    #[test]
    fn remaining_aliases_map_to_bubble() {
        for id in AlgorithmId::ALL {
            if id.is_alias() && id != AlgorithmId::Tim {
                assert_eq!(id.canonical(), Canonical::Bubble, "{id}");
            }
        }
    }

    #[test]
    fn canonical_round_trip() {
        for id in AlgorithmId::ALL {
            let c = id.canonical();
            assert_eq!(c.algorithm().canonical(), c);
            assert!(!c.algorithm().is_alias());
        }
    }

    #[test]
    fn parse_ids() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.id().parse::<AlgorithmId>(), Ok(id));
        }
        assert_eq!("Quick".parse::<AlgorithmId>(), Ok(AlgorithmId::Quick));
        assert_eq!("odd-even".parse::<AlgorithmId>(), Ok(AlgorithmId::OddEven));
        assert!("sleep".parse::<AlgorithmId>().is_err());
    }

    #[test]
    fn resolve_fails_closed_to_bubble() {
        assert_eq!(AlgorithmId::resolve("heap"), AlgorithmId::Heap);
        assert_eq!(AlgorithmId::resolve("quantum"), AlgorithmId::Bubble);
        assert_eq!(AlgorithmId::resolve(""), AlgorithmId::Bubble);
    }

    #[test]
    fn display_names() {
        assert_eq!(AlgorithmId::OddEven.display_name(), "Odd-Even Sort");
        assert_eq!(AlgorithmId::Quick.display_name(), "Quick Sort");
        assert!(
            AlgorithmId::ALL
                .iter()
                .all(|id| id.display_name().ends_with(" Sort"))
        );
    }
}
