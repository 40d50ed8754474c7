use std::ops::Range;

use super::config::LengthRange;
use super::integrity::is_intact;
use crate::model::residue::Residue;
use crate::model::structure::Chain;

/// Residues in an anchor.
pub const ANCHOR_LEN: usize = 3;

/// A candidate pair of anchors within one chain, by residue position.
///
/// Windows are only produced by [`Windows`], so the C-anchor always starts
/// after the N-anchor ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    n_start: usize,
    c_start: usize,
    separation: usize,
}

impl Window {
    fn new(n_start: usize, c_start: usize) -> Self {
        Self {
            n_start,
            c_start,
            separation: c_start - (n_start + ANCHOR_LEN),
        }
    }

    /// Position of the first N-anchor residue.
    #[inline]
    pub fn n_start(&self) -> usize {
        self.n_start
    }

    /// Position of the first C-anchor residue.
    #[inline]
    pub fn c_start(&self) -> usize {
        self.c_start
    }

    /// Residues strictly between the last N-anchor and first C-anchor residue.
    #[inline]
    pub fn separation(&self) -> usize {
        self.separation
    }

    /// Positions of the last residue of each anchor.
    #[inline]
    pub fn n_end(&self) -> usize {
        self.n_start + ANCHOR_LEN - 1
    }

    #[inline]
    pub fn c_end(&self) -> usize {
        self.c_start + ANCHOR_LEN - 1
    }

    /// Half-open span from the first N-anchor residue to one past the last
    /// C-anchor residue.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.n_start..self.c_end() + 1
    }

    /// N-anchor residues, or `None` when `chain` is too short for this window.
    pub fn n_anchor<'a>(&self, chain: &'a Chain) -> Option<[&'a Residue; ANCHOR_LEN]> {
        anchor(chain, self.n_start)
    }

    pub fn c_anchor<'a>(&self, chain: &'a Chain) -> Option<[&'a Residue; ANCHOR_LEN]> {
        anchor(chain, self.c_start)
    }
}

fn anchor(chain: &Chain, start: usize) -> Option<[&Residue; ANCHOR_LEN]> {
    match chain.residues.get(start..start + ANCHOR_LEN)? {
        [a, b, c] => Some([a, b, c]),
        _ => None,
    }
}

/// Iterator over the intact anchor windows of a chain.
///
/// For each N-anchor start the C-anchor starts two residues after the last
/// N-anchor residue, so at least one residue separates the anchors, and
/// moves towards the C terminus. Candidates shorter than the minimum loop
/// length are skipped; once the maximum is passed the scan moves on to the
/// next N-anchor. Windows that cross a chain break are never yielded.
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    chain: &'a Chain,
    lengths: LengthRange,
    n_start: usize,
    c_start: Option<usize>,
}

impl<'a> Windows<'a> {
    pub fn new(chain: &'a Chain, lengths: LengthRange) -> Self {
        Self {
            chain,
            lengths,
            n_start: 0,
            c_start: None,
        }
    }

    fn next_n_anchor(&mut self) {
        self.n_start += 1;
        self.c_start = None;
    }
}

impl Iterator for Windows<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        let len = self.chain.len();

        loop {
            // The last N-anchor residue needs a successor before any C-anchor
            // can be placed.
            let n_end = self.n_start + ANCHOR_LEN - 1;
            if n_end + 1 >= len {
                return None;
            }

            let c_start = *self.c_start.get_or_insert(n_end + 2);
            let window = Window::new(self.n_start, c_start);

            if self.lengths.exceeds_max(window.separation) || window.c_end() >= len {
                self.next_n_anchor();
                continue;
            }
            self.c_start = Some(c_start + 1);

            if !self.lengths.reaches_min(window.separation) {
                continue;
            }

            let span = window.span();
            if is_intact(self.chain, span.start, span.end) {
                return Some(window);
            }
        }
    }
}
