use uuid::Uuid;

/// Prefix carried by every generated itinerary id.
pub const ITINERARY_ID_PREFIX: &str = "itinerary_";

/// Generates identifiers for new itineraries.
pub trait IdGenerator: Send + Sync {
    /// Returns an id for a record derived from `seed`.
    fn next_id(&self, seed: &str) -> String;
}

/// Deterministic generator: the same seed always yields the same id.
///
/// Ids have the form `itinerary_<base36>` where the suffix is the absolute
/// value of [`query_hash`] of the seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashIdGenerator;

impl IdGenerator for HashIdGenerator {
    fn next_id(&self, seed: &str) -> String {
        let hash = i64::from(query_hash(seed)).unsigned_abs();
        format!("{ITINERARY_ID_PREFIX}{}", to_base36(hash))
    }
}

/// Random generator producing `itinerary_<uuid>` ids. The seed is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, _seed: &str) -> String {
        format!("{ITINERARY_ID_PREFIX}{}", Uuid::new_v4().simple())
    }
}

/// 32-bit rolling string hash (`h * 31 + unit` over UTF-16 code units,
/// wrapping on overflow).
pub fn query_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    })
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
