//! The Geohash-36 symbol grid and its reverse index.
//!
//! Symbols are laid out row-major on a 6×6 grid. Row 0 is the northernmost
//! latitude band and column 0 the westernmost longitude band of a cell.
//!
//! ```text
//!     0 1 2 3 4 5
//! 0   2 3 4 5 6 7
//! 1   8 9 b B C d
//! 2   D F g G h H
//! 3   j J K l L M
//! 4   n N P q Q r
//! 5   R t T V W X
//! ```
//!
//! The reverse index is keyed by `symbol mod 36`. That key is not injective
//! over the alphabet, so each bucket holds up to two candidate positions which
//! are checked against the grid in order.

use once_cell::sync::Lazy;

/// Side length of the symbol grid.
pub const GRID_SIDE: usize = 6;

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = GRID_SIDE * GRID_SIDE;

/// The symbol grid, row-major.
pub const GRID: [[u8; GRID_SIDE]; GRID_SIDE] = [
    [b'2', b'3', b'4', b'5', b'6', b'7'],
    [b'8', b'9', b'b', b'B', b'C', b'd'],
    [b'D', b'F', b'g', b'G', b'h', b'H'],
    [b'j', b'J', b'K', b'l', b'L', b'M'],
    [b'n', b'N', b'P', b'q', b'Q', b'r'],
    [b'R', b't', b'T', b'V', b'W', b'X'],
];

static REVERSE_INDEX: Lazy<ReverseIndex> = Lazy::new(ReverseIndex::build);

/// Returns the symbol at `(row, col)`.
///
/// # Panics
///
/// Panics if `row` or `col` is not below [`GRID_SIDE`].
///
/// # Examples
///
/// ```
/// use geohash36::alphabet::symbol;
///
/// assert_eq!(symbol(0, 0), '2');
/// assert_eq!(symbol(5, 5), 'X');
/// ```
#[inline]
pub fn symbol(row: usize, col: usize) -> char {
    GRID[row][col] as char
}

/// Returns the `(row, col)` grid position of `symbol`, or `None` when the
/// character is not part of the alphabet.
///
/// # Examples
///
/// ```
/// use geohash36::alphabet::position;
///
/// assert_eq!(position('b'), Some((1, 2)));
/// assert_eq!(position('a'), None);
/// ```
#[inline]
pub fn position(symbol: char) -> Option<(usize, usize)> {
    REVERSE_INDEX.position(symbol)
}

/// Whether `symbol` belongs to the alphabet.
#[inline]
pub fn is_valid_symbol(symbol: char) -> bool {
    position(symbol).is_some()
}

/// Candidate grid positions (flat, row-major) sharing one `mod 36` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Bucket {
    primary: Option<u8>,
    secondary: Option<u8>,
}

impl Bucket {
    /// Appends a candidate. Returns `false` if both slots are taken.
    fn push(&mut self, index: u8) -> bool {
        if self.primary.is_none() {
            self.primary = Some(index);
            true
        } else if self.secondary.is_none() {
            self.secondary = Some(index);
            true
        } else {
            false
        }
    }

    fn candidates(&self) -> impl Iterator<Item = u8> {
        self.primary.into_iter().chain(self.secondary)
    }
}

#[derive(Debug)]
struct ReverseIndex {
    buckets: [Bucket; ALPHABET_SIZE],
}

impl ReverseIndex {
    fn build() -> Self {
        let mut buckets = [Bucket::default(); ALPHABET_SIZE];

        for (flat, &byte) in GRID.iter().flatten().enumerate() {
            let inserted = buckets[Self::key(byte)].push(flat as u8);
            debug_assert!(
                inserted,
                "more than two alphabet symbols share key {}",
                Self::key(byte)
            );
        }

        log::trace!(
            "Built Geohash-36 reverse index: {} occupied buckets",
            buckets.iter().filter(|b| b.primary.is_some()).count()
        );

        Self { buckets }
    }

    #[inline]
    fn key(byte: u8) -> usize {
        byte as usize % ALPHABET_SIZE
    }

    fn position(&self, symbol: char) -> Option<(usize, usize)> {
        if !symbol.is_ascii() {
            return None;
        }
        let byte = symbol as u8;

        self.buckets[Self::key(byte)]
            .candidates()
            .map(usize::from)
            .find(|&flat| GRID[flat / GRID_SIDE][flat % GRID_SIDE] == byte)
            .map(|flat| (flat / GRID_SIDE, flat % GRID_SIDE))
    }
}
