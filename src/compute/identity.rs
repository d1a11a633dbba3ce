//! Content-derived identifiers for cluster groups.
//!
//! A group's identifier is a pure function of its member set, so a cluster
//! that survives a viewport change keeps its identity and the renderer can
//! animate it instead of replacing it. The hash is DJB2 over the sorted
//! member identifiers; it is not a security primitive and collisions only
//! confuse animation.

use uuid::Uuid;

const DJB2_SEED: u64 = 5381;
const SEPARATOR: &str = "-";
const VERSION_BITS: u16 = 0x4000;

/// 64-bit DJB2 hash with wrapping arithmetic.
///
/// # Examples
///
/// ```
/// use stonemap::compute::identity::djb2_64;
///
/// assert_eq!(djb2_64(b""), 5381);
/// assert_eq!(djb2_64(b"abc"), 193485963);
/// ```
pub fn djb2_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |h, &b| {
        (h << 5).wrapping_add(h).wrapping_add(u64::from(b))
    })
}

/// Canonical string for a member set: uppercase hyphenated identifiers,
/// sorted ascending and joined with `-`.
pub fn canonical_key<I>(member_ids: I) -> String
where
    I: IntoIterator<Item = Uuid>,
{
    let mut keys: Vec<String> = member_ids
        .into_iter()
        .map(|id| format!("{:X}", id.hyphenated()))
        .collect();
    keys.sort_unstable();
    keys.join(SEPARATOR)
}

/// Deterministic identifier for a group with the given members.
///
/// Member order does not matter, only the set.
///
/// # Examples
///
/// ```
/// use stonemap::compute::identity::stable_id;
/// use uuid::Uuid;
///
/// let a = Uuid::from_u128(1);
/// let b = Uuid::from_u128(2);
/// assert_eq!(stable_id([a, b]), stable_id([b, a]));
/// ```
pub fn stable_id<I>(member_ids: I) -> Uuid
where
    I: IntoIterator<Item = Uuid>,
{
    let key = canonical_key(member_ids);
    pack(&key, djb2_64(key.as_bytes()))
}

/// Layout: `h1-[h>>16]-4[len]-[h>>48]-[first][last][h2]`.
fn pack(key: &str, hash: u64) -> Uuid {
    let bytes = key.as_bytes();
    let h1 = hash as u32;
    let h2 = (hash >> 32) as u32;
    let length = bytes.len() as u16;
    let first = bytes.first().copied().unwrap_or(0);
    let last = bytes.last().copied().unwrap_or(0);

    let mid = (hash >> 16) as u16;
    let version_and_length = VERSION_BITS | (length & 0x0FFF);
    let [hi_a, hi_b] = ((hash >> 48) as u16).to_be_bytes();
    let [h2_a, h2_b, h2_c, h2_d] = h2.to_be_bytes();

    Uuid::from_fields(
        h1,
        mid,
        version_and_length,
        &[hi_a, hi_b, first, last, h2_a, h2_b, h2_c, h2_d],
    )
}
