//! An explicit, order-sensitive hash over geometry contents.
//!
//! Values are reproducible across platforms and runs, unlike [`std::hash::Hash`] with a
//! randomized hasher, so they can be stored or compared between processes.

use crate::geometry::WKBType;

/// Non-zero starting value of every fold, so an empty sequence does not hash to 0.
pub const HASH_SEED: u32 = 266_370_105;

/// A 32 bit structural hash.
///
/// Geometries that compare equal always have equal hash codes.
pub trait HashCode {
    fn hash_code(&self) -> u32;
}

/// Fold one value into a running accumulator.
#[inline]
pub fn combine(acc: u32, value: u32) -> u32 {
    acc.rotate_left(acc % u32::BITS) ^ value
}

/// Hash of a single f64 component.
///
/// `-0.0` and `0.0` compare equal, so they have to hash equally too.
#[inline]
pub fn f64_hash(value: f64) -> u32 {
    let value = if value == 0.0 { 0.0 } else { value };
    let bits = value.to_bits();
    (bits ^ (bits >> 32)) as u32
}

/// Fold a type tag and then each element in order.
pub(crate) fn hash_sequence<'a, T: HashCode + 'a>(
    wkb_type: WKBType,
    items: impl IntoIterator<Item = &'a T>,
) -> u32 {
    items
        .into_iter()
        .fold(combine(HASH_SEED, wkb_type.into()), |acc, item| {
            combine(acc, item.hash_code())
        })
}
