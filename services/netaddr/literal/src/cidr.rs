//! CIDR arithmetic on raw big-endian octets.
//!
//! The functions work on any width so every family shares them. Prefix
//! lengths larger than the address width leave the address unchanged.

/// Clear every bit after the first `prefix_len` bits
pub fn network_address(octets: &mut [u8], prefix_len: u8) {
    let byte_index = usize::from(prefix_len / 8);
    let bits = prefix_len % 8;
    if let Some(byte) = octets.get_mut(byte_index) {
        *byte &= keep_mask(bits);
    }
    for byte in octets.iter_mut().skip(byte_index + 1) {
        *byte = 0;
    }
}

/// Set every bit after the first `prefix_len` bits
pub fn broadcast_address(octets: &mut [u8], prefix_len: u8) {
    let byte_index = usize::from(prefix_len / 8);
    let bits = prefix_len % 8;
    if let Some(byte) = octets.get_mut(byte_index) {
        *byte |= !keep_mask(bits);
    }
    for byte in octets.iter_mut().skip(byte_index + 1) {
        *byte = 0xFF;
    }
}

/// Whether `octets` and `network` agree on the first `prefix_len` bits
pub fn same_network(octets: &[u8], network: &[u8], prefix_len: u8) -> bool {
    let full = usize::from(prefix_len / 8);
    let bits = prefix_len % 8;
    if octets.len() != network.len() {
        return false;
    }
    if octets[..full.min(octets.len())] != network[..full.min(network.len())] {
        return false;
    }
    match (octets.get(full), network.get(full)) {
        (Some(a), Some(b)) => a & keep_mask(bits) == b & keep_mask(bits),
        _ => true,
    }
}

/// Increment as a big-endian integer.
///
/// Returns `false`, leaving the octets wrapped to zero, when the increment
/// carries out of the first byte.
pub fn increment(octets: &mut [u8]) -> bool {
    for byte in octets.iter_mut().rev() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            return true;
        }
    }
    false
}

/// Mask keeping the top `bits` bits of a byte
fn keep_mask(bits: u8) -> u8 {
    match bits {
        0 => 0,
        bits => 0xFFu8 << (8 - bits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_address() {
        let mut octets = [10, 0, 0, 5];
        network_address(&mut octets, 24);
        assert_eq!(octets, [10, 0, 0, 0]);

        let mut octets = [192, 168, 77, 200];
        network_address(&mut octets, 20);
        assert_eq!(octets, [192, 168, 64, 0]);

        let mut octets = [1, 2, 3, 4];
        network_address(&mut octets, 0);
        assert_eq!(octets, [0, 0, 0, 0]);

        let mut octets = [1, 2, 3, 4];
        network_address(&mut octets, 32);
        assert_eq!(octets, [1, 2, 3, 4]);
    }

    #[test]
    fn test_broadcast_address() {
        let mut octets = [10, 0, 0, 5];
        broadcast_address(&mut octets, 24);
        assert_eq!(octets, [10, 0, 0, 255]);

        let mut octets = [192, 168, 64, 0];
        broadcast_address(&mut octets, 20);
        assert_eq!(octets, [192, 168, 79, 255]);

        let mut octets = [1, 2, 3, 4];
        broadcast_address(&mut octets, 0);
        assert_eq!(octets, [255; 4]);

        let mut octets = [1, 2, 3, 4];
        broadcast_address(&mut octets, 32);
        assert_eq!(octets, [1, 2, 3, 4]);
    }

    #[test]
    fn test_increment_carries() {
        let mut octets = [10, 0, 0, 255];
        assert!(increment(&mut octets));
        assert_eq!(octets, [10, 0, 1, 0]);

        let mut octets = [0, 255, 255, 255];
        assert!(increment(&mut octets));
        assert_eq!(octets, [1, 0, 0, 0]);

        let mut octets = [255; 4];
        assert!(!increment(&mut octets));
        assert_eq!(octets, [0; 4]);
    }

    #[test]
    fn test_same_network() {
        assert!(same_network(&[10, 0, 0, 77], &[10, 0, 0, 0], 24));
        assert!(!same_network(&[10, 0, 1, 77], &[10, 0, 0, 0], 24));
        assert!(same_network(&[192, 168, 79, 1], &[192, 168, 64, 0], 20));
        assert!(!same_network(&[192, 168, 80, 1], &[192, 168, 64, 0], 20));
        assert!(same_network(&[1, 2, 3, 4], &[0, 0, 0, 0], 0));
        assert!(same_network(&[1, 2, 3, 4], &[1, 2, 3, 4], 32));
        assert!(!same_network(&[1, 2, 3, 5], &[1, 2, 3, 4], 32));
    }
}
