use chrono::Utc;
use rand::Rng;

/// Byte width of a record identifier.
pub const OBJECT_ID_BYTES: usize = 12;

/// Hex width of a record identifier as it appears on the wire.
pub const OBJECT_ID_HEX_LEN: usize = OBJECT_ID_BYTES * 2;

/// Generate a fresh 12-byte identifier, printed as 24 hex characters:
/// 4 bytes of big-endian UTC seconds followed by 8 random bytes.
pub fn generate() -> String {
    let mut bytes = [0u8; OBJECT_ID_BYTES];
    let secs = Utc::now().timestamp() as u32;
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    rand::thread_rng().fill(&mut bytes[4..]);
    hex::encode(bytes)
}
