//! XOR-reduction checksum over an NMEA 0183 sentence body.

/// Folds the bytes of `body` together with bitwise XOR.
///
/// `body` is the text strictly between the leading `$` and the `*`
/// delimiter.
pub fn xor_reduce(body: &str) -> u8 {
    body.bytes().fold(0, |acc, b| acc ^ b)
}

/// Renders `sum` as lowercase hex, without zero padding.
pub fn hex_lower(sum: u8) -> String {
    format!("{:x}", sum)
}

/// Renders `sum` as uppercase hex, without zero padding.
pub fn hex_upper(sum: u8) -> String {
    format!("{:X}", sum)
}

/// Checks `declared` against both case renderings of `sum`.
///
/// The sentence format does not fix the case of the declared checksum, but
/// mixed case does not match either rendering and is rejected.
pub fn matches_declared(sum: u8, declared: &str) -> bool {
    declared == hex_lower(sum) || declared == hex_upper(sum)
}
