// ---------------------------------------------------------------------------
// codec_fuzz_tests – decoder robustness against malformed input
// ---------------------------------------------------------------------------
//
// Random bytes, random truncations, and random single-byte corruptions.
// Malformed input must produce an error or a clean decode of equal bytes,
// never a panic, and a failed decode must leave the target record
// untouched.

#[cfg(test)]
mod tests {
    use ordinance::gambling;

    use crate::ordinance_codec::{decode_ordinance, encode_ordinance};

    /// Simple deterministic pseudo-random number generator (xorshift64).
    struct Rng(u64);

    impl Rng {
        fn new(seed: u64) -> Self {
            Self(seed)
        }

        fn next_u64(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }

        fn next_u8(&mut self) -> u8 {
            (self.next_u64() & 0xFF) as u8
        }

        fn fill_bytes(&mut self, buf: &mut [u8]) {
            for byte in buf.iter_mut() {
                *byte = self.next_u8();
            }
        }

        fn gen_range(&mut self, lo: usize, hi: usize) -> usize {
            if lo >= hi {
                return lo;
            }
            (self.next_u64() as usize) % (hi - lo) + lo
        }
    }

    #[test]
    fn test_random_bytes_never_panic() {
        let mut rng = Rng::new(0x5EED_0001);

        for _ in 0..500 {
            let len = rng.gen_range(0, 256);
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);

            let mut record = gambling::legalize_gambling();
            let before = record.saved_state();
            if decode_ordinance(&bytes, &mut record).is_err() {
                assert_eq!(record.saved_state(), before);
            }
        }
    }

    #[test]
    fn test_random_truncations_never_panic() {
        let mut rng = Rng::new(0x5EED_0002);
        let bytes = encode_ordinance(&gambling::legalize_gambling());

        for _ in 0..500 {
            let cut = rng.gen_range(0, bytes.len());
            let mut record = gambling::legalize_gambling();
            let before = record.saved_state();
            assert!(decode_ordinance(&bytes[..cut], &mut record).is_err());
            assert_eq!(record.saved_state(), before);
        }
    }

    #[test]
    fn test_single_byte_corruptions_never_panic() {
        let mut rng = Rng::new(0x5EED_0003);
        let valid = encode_ordinance(&gambling::legalize_gambling());

        for _ in 0..500 {
            let mut bytes = valid.clone();
            let index = rng.gen_range(0, bytes.len());
            bytes[index] ^= rng.next_u8() | 1;

            let mut record = gambling::legalize_gambling();
            let before = record.saved_state();
            match decode_ordinance(&bytes, &mut record) {
                // Corruptions in free-value fields still decode; the result
                // must account for every input byte of the record.
                Ok(consumed) => assert!(consumed <= bytes.len()),
                Err(_) => assert_eq!(record.saved_state(), before),
            }
        }
    }

    #[test]
    fn test_oversized_string_lengths_rejected() {
        let mut rng = Rng::new(0x5EED_0004);
        let valid = encode_ordinance(&gambling::legalize_gambling());

        // The name length prefix lives right after version + initialized +
        // clsid.
        let name_len_offset = 2 + 1 + 4;
        for _ in 0..100 {
            let mut bytes = valid.clone();
            let huge = (rng.next_u64() as u32) | 0x0001_0000;
            bytes[name_len_offset..name_len_offset + 4].copy_from_slice(&huge.to_le_bytes());

            let mut record = gambling::legalize_gambling();
            assert!(decode_ordinance(&bytes, &mut record).is_err());
        }
    }
}
