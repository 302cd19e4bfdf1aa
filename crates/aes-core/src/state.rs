//! The 4×4 cipher state.

use core::fmt;

use crate::block::{pack_word, unpack_word, Block, Word, NB};

/// One block held as four columns of four bytes (column-major, FIPS-197 §3.4).
///
/// `State[c][r]` is row `r` of column `c`; input byte `n` lands at
/// column `n / 4`, row `n % 4`.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct State(pub [[u8; 4]; NB]);

impl State {
    /// Loads a block into a fresh state.
    pub fn from_block(block: &Block) -> Self {
        Self(core::array::from_fn(|c| {
            [block[4 * c], block[4 * c + 1], block[4 * c + 2], block[4 * c + 3]]
        }))
    }

    /// Copies the state out into a block.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (chunk, column) in block.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(column);
        }
        block
    }

    /// Returns the byte at `row` of `column`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.0[column][row]
    }

    /// Column `c` packed as a word.
    #[inline]
    pub fn word(&self, c: usize) -> Word {
        pack_word(self.0[c])
    }

    /// Overwrites column `c` with the bytes of `word`.
    #[inline]
    pub fn set_word(&mut self, c: usize, word: Word) {
        self.0[c] = unpack_word(word);
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State(")?;
        fmt::LowerHex::fmt(self, f)?;
        write!(f, ")")
    }
}

/// Formats the state as 32 hex digits in block order.
impl fmt::LowerHex for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_block() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_layout_is_column_major() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let state = State::from_block(&block);
        assert_eq!(state.get(0, 0), 0);
        assert_eq!(state.get(1, 0), 1);
        assert_eq!(state.get(0, 1), 4);
        assert_eq!(state.get(3, 3), 15);
        assert_eq!(state.word(2), 0x0809_0a0b);
        assert_eq!(state.to_block(), block);
    }

    #[test]
    fn set_word_replaces_one_column() {
        let mut state = State::default();
        state.set_word(1, 0xdead_beef);
        assert_eq!(state.0[1], [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(state.0[0], [0; 4]);
    }

    #[test]
    fn hex_formatting() {
        let state = State::from_block(&[0xab; 16]);
        assert_eq!(format!("{state:x}"), "ab".repeat(16));
    }
}
