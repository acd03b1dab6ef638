pub mod iteration;
pub mod simd;
pub mod summation;
pub mod traits;

pub use simd::{U64x2, sum_lanes, sum_scalar, sum_simd};
pub use summation::{sum_entities_aos, sum_entities_simd, sum_entities_soa, sum_entities_u16};
pub use traits::FieldSum;
