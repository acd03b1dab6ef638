use common::{
    error::Error,
    types::{EntitiesSoA, EntitiesU64, EntityAoS, EntityU16},
};

use super::summation::{sum_entities_aos, sum_entities_simd, sum_entities_soa, sum_entities_u16};

/// Trait for entity layouts whose `x`, `y` and `z` fields can be summed.
///
/// Lets a benchmark driver measure every layout through the same call.
pub trait FieldSum {
    /// Integer type of each summed field.
    type Output: Copy;

    /// Returns `(sum(x), sum(y), sum(z))`.
    ///
    /// Returns `Err(e)` only when the layout violates its own length invariant.
    fn sum_fields(&self) -> Result<(Self::Output, Self::Output, Self::Output), Error>;

    /// Number of logical entities in the layout.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FieldSum for [EntityAoS] {
    type Output = i64;

    fn sum_fields(&self) -> Result<(i64, i64, i64), Error> {
        Ok(sum_entities_aos(self))
    }

    fn len(&self) -> usize {
        <[EntityAoS]>::len(self)
    }
}

impl FieldSum for [EntityU16] {
    type Output = u16;

    fn sum_fields(&self) -> Result<(u16, u16, u16), Error> {
        Ok(sum_entities_u16(self))
    }

    fn len(&self) -> usize {
        <[EntityU16]>::len(self)
    }
}

impl FieldSum for EntitiesSoA {
    type Output = i64;

    fn sum_fields(&self) -> Result<(i64, i64, i64), Error> {
        sum_entities_soa(self)
    }

    fn len(&self) -> usize {
        EntitiesSoA::len(self)
    }
}

impl FieldSum for EntitiesU64 {
    type Output = u64;

    fn sum_fields(&self) -> Result<(u64, u64, u64), Error> {
        sum_entities_simd(self)
    }

    fn len(&self) -> usize {
        EntitiesU64::len(self)
    }
}
