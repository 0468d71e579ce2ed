use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random short code of exactly `length` characters, drawn
/// uniformly from the 62-symbol alphanumeric set. Uniqueness against the
/// store is the caller's responsibility.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        for length in [1, 2, 8, 20] {
            assert_eq!(generate_code(length).len(), length);
        }
    }

    #[test]
    fn generates_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code(8);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn codes_are_not_constant() {
        // 62^8 keyspace: 20 draws colliding into one value means a broken RNG
        let first = generate_code(8);
        assert!((0..20).any(|_| generate_code(8) != first));
    }
}
