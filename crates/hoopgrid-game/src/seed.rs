use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 128-bit seed for deterministic grid generation, written as 32 hex digits.
///
/// The same seed, league and configuration always produce the same grid.
///
/// ```
/// use hoopgrid_game::GridSeed;
///
/// let seed: GridSeed = "000000000000000000000000000000ff".parse().unwrap();
/// assert_eq!(seed.to_string(), "000000000000000000000000000000ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid grid seed `{input}`: expected 32 hex digits")]
pub struct ParseSeedError {
    input: String,
}

impl GridSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Identifier of the game generated from this seed.
    #[must_use]
    pub const fn game_id(self) -> GameId {
        let num = u128::from_be_bytes(self.0);
        #[expect(clippy::cast_possible_truncation)]
        let folded = (num >> 64) as u64 ^ num as u64;
        GameId(folded)
    }
}

impl fmt::Display for GridSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for GridSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 {
            return Err(err());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| err())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for GridSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GridSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<GridSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GridSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GridSeed(seed)
    }
}

/// Identifier of a generated game, displayed as 16 hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
