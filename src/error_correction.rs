use crate::error::{Error, Result};

/// Bob's key after reconciliation, with the parity bits revealed on the public channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub bits: Vec<bool>,
    pub disclosed_parities: usize,
}

/// Cascade-style reconciliation of Bob's bits against Alice's.
///
/// Blocks with a parity mismatch are bisected until the odd error is found and
/// flipped. Each pass halves the block size, ending with single-bit blocks.
///
/// The single-bit pass publishes one parity per key bit, i.e. the whole key.
/// This models agreement only; `disclosed_parities` reports the leakage and no
/// privacy amplification follows, so a reconciled key is not secret.
pub fn cascade_correction(alice_bits: &[bool], bob_bits: &[bool]) -> Result<Correction> {
    if alice_bits.len() != bob_bits.len() {
        return Err(Error::KeyLengthMismatch {
            alice: alice_bits.len(),
            bob: bob_bits.len(),
        });
    }

    let mut corrected_bits = bob_bits.to_vec();
    let mut disclosed_parities = 0;
    if alice_bits.is_empty() {
        return Ok(Correction {
            bits: corrected_bits,
            disclosed_parities,
        });
    }

    let mut block_size = determine_optimal_block_size(alice_bits.len());
    loop {
        for start in (0..alice_bits.len()).step_by(block_size) {
            let end = std::cmp::min(start + block_size, alice_bits.len());
            disclosed_parities += 1;
            if calculate_parity(&alice_bits[start..end])
                != calculate_parity(&corrected_bits[start..end])
            {
                let index = locate_error(
                    alice_bits,
                    &corrected_bits,
                    start,
                    end,
                    &mut disclosed_parities,
                );
                corrected_bits[index] = !corrected_bits[index];
            }
        }
        if block_size == 1 {
            break;
        }
        block_size /= 2;
    }

    Ok(Correction {
        bits: corrected_bits,
        disclosed_parities,
    })
}

// Binary search for one erroneous bit inside a block with odd error count.
fn locate_error(
    alice_bits: &[bool],
    bob_bits: &[bool],
    mut low: usize,
    mut high: usize,
    disclosed_parities: &mut usize,
) -> usize {
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        *disclosed_parities += 1;
        if calculate_parity(&alice_bits[low..mid]) != calculate_parity(&bob_bits[low..mid]) {
            high = mid;
        } else {
            low = mid;
        }
    }
    low
}

fn determine_optimal_block_size(length: usize) -> usize {
    std::cmp::max(4, length / 8)
}

fn calculate_parity(bits: &[bool]) -> bool {
    bits.iter().filter(|&&bit| bit).count() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrected(alice_bits: &[bool], bob_bits: &[bool]) -> Vec<bool> {
        cascade_correction(alice_bits, bob_bits).unwrap().bits
    }

    #[test]
    fn test_cascade_correction() {
        let alice_bits = vec![true, false, true, false, true, false, true, false];
        let bob_bits = vec![true, true, true, false, true, false, true, false];
        assert_eq!(corrected(&alice_bits, &bob_bits), alice_bits);
    }

    #[test]
    fn test_no_error() {
        let alice_bits = vec![false, true, false, true];
        let correction = cascade_correction(&alice_bits, &alice_bits).unwrap();
        assert_eq!(correction.bits, alice_bits);
        assert!(correction.disclosed_parities > 0);
    }

    #[test]
    fn test_single_error() {
        let alice_bits = vec![true, false, false, true];
        let mut bob_bits = alice_bits.clone();
        bob_bits[1] = !bob_bits[1];
        assert_eq!(corrected(&alice_bits, &bob_bits), alice_bits);
    }

    #[test]
    fn test_multiple_errors_in_one_block() {
        let alice_bits = vec![true, true, false, false];
        let mut bob_bits = alice_bits.clone();
        bob_bits[0] = !bob_bits[0];
        bob_bits[3] = !bob_bits[3];
        assert_eq!(corrected(&alice_bits, &bob_bits), alice_bits);
    }

    #[test]
    fn test_all_bits_flipped() {
        let alice_bits = vec![true, true, true, true];
        let bob_bits = vec![false, false, false, false];
        assert_eq!(corrected(&alice_bits, &bob_bits), alice_bits);
    }

    #[test]
    fn test_long_key_with_scattered_errors() {
        let alice_bits: Vec<bool> = (0..100).map(|i| i % 3 == 0).collect();
        let mut bob_bits = alice_bits.clone();
        for i in [2, 5, 17, 18, 64, 99] {
            bob_bits[i] = !bob_bits[i];
        }
        assert_eq!(corrected(&alice_bits, &bob_bits), alice_bits);
    }

    #[test]
    fn test_final_pass_discloses_every_bit() {
        let alice_bits: Vec<bool> = (0..64).map(|i| i % 5 == 0).collect();
        let correction = cascade_correction(&alice_bits, &alice_bits).unwrap();
        // blocks of 8, 4, 2 and 1
        assert_eq!(correction.disclosed_parities, 8 + 16 + 32 + 64);
        assert!(correction.disclosed_parities >= alice_bits.len());
    }

    #[test]
    fn test_empty_keys() {
        let correction = cascade_correction(&[], &[]).unwrap();
        assert!(correction.bits.is_empty());
        assert_eq!(correction.disclosed_parities, 0);
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let result = cascade_correction(&[true, false], &[true]);
        assert!(matches!(
            result,
            Err(Error::KeyLengthMismatch { alice: 2, bob: 1 })
        ));
    }
}
