use common::{
    error::Error,
    types::{EntitiesSoA, EntitiesU64, EntityAoS, EntityU16},
};

use super::simd::sum_simd;

/// Sums `x`, `y` and `z` across a slice of AoS entities.
///
/// Every entity is loaded in full, so the ten unused string fields sit between
/// consecutive `x` values in memory. Addition wraps on overflow.
pub fn sum_entities_aos(data: &[EntityAoS]) -> (i64, i64, i64) {
    let (mut x, mut y, mut z) = (0i64, 0i64, 0i64);
    for entity in data {
        x = x.wrapping_add(entity.x);
        y = y.wrapping_add(entity.y);
        z = z.wrapping_add(entity.z);
    }
    (x, y, z)
}

/// Sums `x`, `y` and `z` across narrow entities, modulo 2^16.
pub fn sum_entities_u16(data: &[EntityU16]) -> (u16, u16, u16) {
    let (mut x, mut y, mut z) = (0u16, 0u16, 0u16);
    for entity in data {
        x = x.wrapping_add(entity.x);
        y = y.wrapping_add(entity.y);
        z = z.wrapping_add(entity.z);
    }
    (x, y, z)
}

/// Sums each numeric column of a SoA collection independently.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] when the columns differ in length. The sum
/// is never taken over a truncated column.
pub fn sum_entities_soa(data: &EntitiesSoA) -> Result<(i64, i64, i64), Error> {
    data.validate()?;
    Ok((sum_column(&data.x), sum_column(&data.y), sum_column(&data.z)))
}

/// Sums each column of a `u64` collection with the vectorized kernel.
pub fn sum_entities_simd(data: &EntitiesU64) -> Result<(u64, u64, u64), Error> {
    data.validate()?;
    Ok((sum_simd(&data.x), sum_simd(&data.y), sum_simd(&data.z)))
}

fn sum_column(column: &[i64]) -> i64 {
    column.iter().fold(0i64, |acc, v| acc.wrapping_add(*v))
}
