//! Engineering disciplines used to classify tags.
//!
//! The set is closed: parsing accepts exactly the four names below and
//! nothing else, which is what gates bulk deletion.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Engineering discipline a tag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    Mechanical,
    Electrical,
    Instrumentation,
    Process,
}

/// Returned when text does not name one of the known disciplines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized discipline: '{0}'")]
pub struct UnknownDiscipline(pub String);

impl Discipline {
    /// Every discipline, in prompt and chart order
    pub const ALL: [Discipline; 4] = [
        Discipline::Mechanical,
        Discipline::Electrical,
        Discipline::Instrumentation,
        Discipline::Process,
    ];

    /// Name as stored in the `discipline` column
    pub fn as_str(self) -> &'static str {
        match self {
            Discipline::Mechanical => "Mechanical",
            Discipline::Electrical => "Electrical",
            Discipline::Instrumentation => "Instrumentation",
            Discipline::Process => "Process",
        }
    }

    /// Short label for narrow chart bars
    pub fn abbreviation(self) -> &'static str {
        match self {
            Discipline::Mechanical => "Mech",
            Discipline::Electrical => "Elec",
            Discipline::Instrumentation => "Inst",
            Discipline::Process => "Proc",
        }
    }

    /// The discipline after this one, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        match self {
            Discipline::Mechanical => 0,
            Discipline::Electrical => 1,
            Discipline::Instrumentation => 2,
            Discipline::Process => 3,
        }
    }
}

impl Default for Discipline {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = UnknownDiscipline;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|discipline| discipline.as_str() == s)
            .ok_or_else(|| UnknownDiscipline(s.to_string()))
    }
}

/// Number of stored tags per discipline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisciplineCounts {
    counts: [u64; 4],
}

impl DisciplineCounts {
    /// Build counts from `(discipline, count)` rows; unknown disciplines are skipped.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        let mut counts = Self::default();
        for (name, count) in rows {
            if let Ok(discipline) = name.parse::<Discipline>() {
                counts.counts[discipline.index()] += u64::try_from(count).unwrap_or(0);
            }
        }
        counts
    }

    pub fn get(&self, discipline: Discipline) -> u64 {
        self.counts[discipline.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// How many disciplines have at least one tag
    pub fn covered(&self) -> usize {
        self.counts.iter().filter(|count| **count > 0).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Discipline, u64)> + '_ {
        Discipline::ALL.into_iter().map(move |discipline| (discipline, self.get(discipline)))
    }
}
