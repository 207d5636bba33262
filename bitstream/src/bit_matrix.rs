//! Dense, row-major bit matrices.

/// Storage unit of a [`BitMatrix`] row.
pub type Word = u64;

const WORD_BITS: usize = Word::BITS as usize;

/// A fixed size matrix of bits stored as rows of packed words.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    words: Vec<Word>,
    columns: usize,
    rows: usize,
    stride: usize,
}

impl std::fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for row in 0..self.rows {
            list.entry(&self.row_string(row));
        }
        list.finish()
    }
}

impl BitMatrix {
    /// Returns an all zero matrix of the given shape.
    pub fn zeroed(rows: usize, columns: usize) -> Self {
        let stride = columns.div_ceil(WORD_BITS);
        Self {
            words: vec![0; rows * stride],
            columns,
            rows,
            stride,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the bit at the given position.
    pub fn bit(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows);
        assert!(col < self.columns);

        self.words[row * self.stride + col / WORD_BITS] & (1 << (col % WORD_BITS)) != 0
    }

    /// Sets or clears the bit at the given position.
    pub fn set_bit(&mut self, row: usize, col: usize, bit: bool) {
        assert!(row < self.rows);
        assert!(col < self.columns);

        let word = &mut self.words[row * self.stride + col / WORD_BITS];
        let mask = 1 << (col % WORD_BITS);
        if bit {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Returns the packed words of a row, with column `c` at bit `c % 64` of word `c / 64`.
    pub fn packed_row(&self, row: usize) -> &[Word] {
        assert!(row < self.rows);
        &self.words[row * self.stride..][..self.stride]
    }

    /// Returns `true` if no bit in the row is set.
    pub fn row_is_zero(&self, row: usize) -> bool {
        self.packed_row(row).iter().all(|&word| word == 0)
    }

    /// Number of set bits in the whole matrix.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Iterates over the bits of a row in column order.
    pub fn row_bits(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        let packed = self.packed_row(row);
        (0..self.columns).map(move |col| packed[col / WORD_BITS] & (1 << (col % WORD_BITS)) != 0)
    }

    /// Iterates over all bits, row by row.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.rows).flat_map(move |row| self.row_bits(row))
    }

    /// Renders a row as a string of `'0'` and `'1'` characters.
    pub fn row_string(&self, row: usize) -> String {
        self.row_bits(row)
            .map(|bit| if bit { '1' } else { '0' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn test_bitmatrix_set_and_get() {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
        for (rows, cols) in [(16, 11), (5, 64), (3, 130)] {
            let mut m = BitMatrix::zeroed(rows, cols);
            let mut expected = vec![vec![false; cols]; rows];

            for _ in 0..rows * cols {
                let (i, j) = (rng.gen_range(0..rows), rng.gen_range(0..cols));
                let bit = rng.gen();
                m.set_bit(i, j, bit);
                expected[i][j] = bit;
            }

            for i in 0..rows {
                for j in 0..cols {
                    assert_eq!(m.bit(i, j), expected[i][j], "{i} {j}");
                }
                assert_eq!(m.row_bits(i).collect::<Vec<_>>(), expected[i]);
            }

            let ones = expected.iter().flatten().filter(|&&bit| bit).count();
            assert_eq!(m.count_ones(), ones);
            assert_eq!(m.bits().count(), rows * cols);
        }
    }

    #[test]
    fn test_row_string() {
        let mut m = BitMatrix::zeroed(2, 5);
        m.set_bit(0, 0, true);
        m.set_bit(1, 4, true);
        assert_eq!(m.row_string(0), "10000");
        assert_eq!(m.row_string(1), "00001");
        assert!(!m.row_is_zero(1));
        m.set_bit(1, 4, false);
        assert!(m.row_is_zero(1));
    }
}
