use super::error::Error;

/// Array of Structs (AoS) entity.
///
/// Only `x`, `y` and `z` are ever summed. The ten string fields are never read;
/// they exist so that one entity occupies a realistic amount of memory and the
/// summation has to stride over them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityAoS {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub e1: String,
    pub e2: String,
    pub e3: String,
    pub e4: String,
    pub e5: String,
    pub e6: String,
    pub e7: String,
    pub e8: String,
    pub e9: String,
    pub e10: String,
}

impl EntityAoS {
    /// Creates an entity with the given coordinates and empty auxiliary fields.
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self {
            x,
            y,
            z,
            ..Default::default()
        }
    }
}

/// Narrow entity with 16-bit fields and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityU16 {
    pub x: u16,
    pub y: u16,
    pub z: u16,
}

impl EntityU16 {
    pub fn new(x: u16, y: u16, z: u16) -> Self {
        Self { x, y, z }
    }
}

/// Struct of Arrays (SoA) - every field of every entity lives in its own column.
///
/// Index `i` across `x`, `y` and `z` is the same logical entity, so the three
/// numeric columns always share one length. The auxiliary columns mirror the
/// string fields of [`EntityAoS`] and are either empty or the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitiesSoA {
    pub x: Vec<i64>,
    pub y: Vec<i64>,
    pub z: Vec<i64>,
    pub e1: Vec<String>,
    pub e2: Vec<String>,
    pub e3: Vec<String>,
    pub e4: Vec<String>,
    pub e5: Vec<String>,
    pub e6: Vec<String>,
    pub e7: Vec<String>,
    pub e8: Vec<String>,
    pub e9: Vec<String>,
    pub e10: Vec<String>,
}

impl EntitiesSoA {
    /// Builds a collection from the three numeric columns, leaving the
    /// auxiliary columns empty.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if `y` or `z` differ in length from `x`.
    pub fn new(x: Vec<i64>, y: Vec<i64>, z: Vec<i64>) -> Result<Self, Error> {
        let soa = Self {
            x,
            y,
            z,
            ..Default::default()
        };
        soa.validate()?;
        Ok(soa)
    }

    /// Number of logical entities, taken from the `x` column.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Checks that `y` and `z` match the length of `x`, and that every
    /// populated auxiliary column does too.
    pub fn validate(&self) -> Result<(), Error> {
        let n = self.x.len();
        check_column_len("y", n, self.y.len())?;
        check_column_len("z", n, self.z.len())?;

        let aux = [
            ("e1", &self.e1),
            ("e2", &self.e2),
            ("e3", &self.e3),
            ("e4", &self.e4),
            ("e5", &self.e5),
            ("e6", &self.e6),
            ("e7", &self.e7),
            ("e8", &self.e8),
            ("e9", &self.e9),
            ("e10", &self.e10),
        ];
        for (field, column) in aux {
            if !column.is_empty() {
                check_column_len(field, n, column.len())?;
            }
        }
        Ok(())
    }
}

/// Three columns of unsigned 64-bit values, fed to the vectorized summation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitiesU64 {
    pub x: Vec<u64>,
    pub y: Vec<u64>,
    pub z: Vec<u64>,
}

impl EntitiesU64 {
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if `y` or `z` differ in length from `x`.
    pub fn new(x: Vec<u64>, y: Vec<u64>, z: Vec<u64>) -> Result<Self, Error> {
        let cols = Self { x, y, z };
        cols.validate()?;
        Ok(cols)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn validate(&self) -> Result<(), Error> {
        check_column_len("y", self.x.len(), self.y.len())?;
        check_column_len("z", self.x.len(), self.z.len())
    }
}

fn check_column_len(field: &'static str, expected: usize, found: usize) -> Result<(), Error> {
    if expected != found {
        return Err(Error::LengthMismatch {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

impl From<Vec<EntityAoS>> for EntitiesSoA {
    fn from(aos: Vec<EntityAoS>) -> Self {
        let n = aos.len();
        let mut soa = EntitiesSoA {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            e1: Vec::with_capacity(n),
            e2: Vec::with_capacity(n),
            e3: Vec::with_capacity(n),
            e4: Vec::with_capacity(n),
            e5: Vec::with_capacity(n),
            e6: Vec::with_capacity(n),
            e7: Vec::with_capacity(n),
            e8: Vec::with_capacity(n),
            e9: Vec::with_capacity(n),
            e10: Vec::with_capacity(n),
        };
        for entity in aos {
            soa.x.push(entity.x);
            soa.y.push(entity.y);
            soa.z.push(entity.z);
            soa.e1.push(entity.e1);
            soa.e2.push(entity.e2);
            soa.e3.push(entity.e3);
            soa.e4.push(entity.e4);
            soa.e5.push(entity.e5);
            soa.e6.push(entity.e6);
            soa.e7.push(entity.e7);
            soa.e8.push(entity.e8);
            soa.e9.push(entity.e9);
            soa.e10.push(entity.e10);
        }
        soa
    }
}

impl From<EntitiesSoA> for Vec<EntityAoS> {
    /// Rebuilds records by zipping the numeric columns. Empty auxiliary columns
    /// yield empty strings; call [`EntitiesSoA::validate`] first to reject
    /// columns of any other length.
    fn from(soa: EntitiesSoA) -> Self {
        let mut aux = [
            soa.e1.into_iter(),
            soa.e2.into_iter(),
            soa.e3.into_iter(),
            soa.e4.into_iter(),
            soa.e5.into_iter(),
            soa.e6.into_iter(),
            soa.e7.into_iter(),
            soa.e8.into_iter(),
            soa.e9.into_iter(),
            soa.e10.into_iter(),
        ];
        soa.x
            .into_iter()
            .zip(soa.y)
            .zip(soa.z)
            .map(|((x, y), z)| {
                let [e1, e2, e3, e4, e5, e6, e7, e8, e9, e10] =
                    aux.each_mut().map(|col| col.next().unwrap_or_default());
                EntityAoS {
                    x,
                    y,
                    z,
                    e1,
                    e2,
                    e3,
                    e4,
                    e5,
                    e6,
                    e7,
                    e8,
                    e9,
                    e10,
                }
            })
            .collect()
    }
}
