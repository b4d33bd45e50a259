//! PDA seed helpers shared by the program and off-chain clients
//!
//! The program name is folded into a fixed 32-byte seed so that names of any
//! length fit the seed-length limit. This is a cheap, non-cryptographic hash:
//! collisions only alias two names of the same auditor, they never weaken the
//! SHA-256 audit fingerprint stored in the record.

/// Length of the program-name seed component
pub const NAME_SEED_LEN: usize = 32;

/// Fold a program name into a 32-byte PDA seed.
///
/// Bytes 0..4 hold a big-endian 32-bit rolling hash (`acc * 31 + byte`,
/// wrapping). The remaining bytes repeat the name's UTF-8 bytes starting at
/// index 4 modulo the name length. An empty name yields all zeros.
///
/// Already-derived addresses depend on this exact bit layout, including the
/// 32-bit wraparound.
pub fn name_seed(program_name: &str) -> [u8; NAME_SEED_LEN] {
    let bytes = program_name.as_bytes();
    let mut seed = [0u8; NAME_SEED_LEN];

    let acc = bytes.iter().fold(0u32, |acc, &b| {
        acc.wrapping_shl(5).wrapping_sub(acc).wrapping_add(u32::from(b))
    });
    seed[..4].copy_from_slice(&acc.to_be_bytes());

    if !bytes.is_empty() {
        for (i, slot) in seed.iter_mut().enumerate().skip(4) {
            *slot = bytes[i % bytes.len()];
        }
    }

    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    #[test]
    fn empty_name_is_all_zero() {
        assert_eq!(name_seed(""), [0u8; 32]);
    }

    #[test]
    fn single_byte_name_repeats() {
        let seed = name_seed("a");
        assert_eq!(&seed[..4], &[0x00, 0x00, 0x00, 0x61]);
        assert!(seed[4..].iter().all(|&b| b == b'a'));
    }

    #[test]
    fn padding_starts_at_index_four() {
        let seed = name_seed("abc");
        assert_eq!(&seed[..4], &96354u32.to_be_bytes());
        // 4 % 3 == 1, so padding begins with 'b'
        assert_eq!(&seed[4..10], b"bcabca");
    }

    #[test]
    fn wraps_past_32_bits() {
        let seed = name_seed("vulnerable_vault");
        assert_eq!(
            hex(&seed),
            "d3f3467b657261626c655f7661756c7476756c6e657261626c655f7661756c74"
        );
    }

    #[test]
    fn hashes_utf8_bytes_not_chars() {
        let seed = name_seed("héllo wörld");
        assert_eq!(
            hex(&seed),
            "25eb159f6c6f2077c3b6726c6468c3a96c6c6f2077c3b6726c6468c3a96c6c6f"
        );
    }

    #[test]
    fn distinct_names_give_distinct_seeds() {
        assert_ne!(name_seed("vault_v1"), name_seed("vault_v2"));
        assert_eq!(name_seed("vault_v1"), name_seed("vault_v1"));
    }
}
