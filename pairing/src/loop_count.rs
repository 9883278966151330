//! Bit iteration over Miller loop counts.

/// Bits of a little-endian multi-word integer below its most significant set bit,
/// most significant first.
pub(crate) fn bits_below_msb(words: &[u64]) -> impl Iterator<Item = bool> + '_ {
    let bit_len = words
        .iter()
        .rposition(|&word| word != 0)
        .map_or(0, |i| 64 * (i + 1) - words[i].leading_zeros() as usize);

    (0..bit_len.saturating_sub(1))
        .rev()
        .map(move |i| (words[i / 64] >> (i % 64)) & 1 == 1)
}

#[cfg(test)]
mod tests {
    use super::bits_below_msb;
    use alloc::vec::Vec;

    #[test]
    fn skips_the_leading_one() {
        let bits: Vec<_> = bits_below_msb(&[0b1011]).collect();
        assert_eq!(bits, [false, true, true]);
    }

    #[test]
    fn crosses_word_boundaries() {
        let bits: Vec<_> = bits_below_msb(&[1, 0b10]).collect();
        assert_eq!(bits.len(), 65);
        assert!(!bits[0]);
        assert!(bits[64]);
        assert_eq!(bits.iter().filter(|&&bit| bit).count(), 1);
    }

    #[test]
    fn zero_and_one_have_no_bits() {
        assert_eq!(bits_below_msb(&[]).count(), 0);
        assert_eq!(bits_below_msb(&[0, 0]).count(), 0);
        assert_eq!(bits_below_msb(&[1]).count(), 0);
    }
}
