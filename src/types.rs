use std::fmt;
use std::str::FromStr;

/// A puzzle day this crate knows how to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    /// Red-nosed reports: bounded monotonic sequences.
    Reports,
    /// Print queue: precedence rules over page updates.
    PrintQueue,
    /// Hoof it: unit-step hiking trails on a height map.
    Trails,
}

impl Day {
    /// Calendar number of the day.
    pub fn number(self) -> u8 {
        match self {
            Day::Reports => 2,
            Day::PrintQueue => 5,
            Day::Trails => 10,
        }
    }

    /// Default input file name, relative to the inputs directory.
    pub fn default_input_name(self) -> String {
        format!("day{}.txt", self.number())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.number())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let digits = trimmed.strip_prefix("day").unwrap_or(&trimmed).trim();
        match digits.parse::<u8>() {
            Ok(2) => Ok(Day::Reports),
            Ok(5) => Ok(Day::PrintQueue),
            Ok(10) => Ok(Day::Trails),
            _ => Err(format!(
                "unsupported day: {s} (expected one of 2, 5, 10)"
            )),
        }
    }
}

/// Which half of a day's puzzle to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const BOTH: [Part; 2] = [Part::One, Part::Two];
}

impl FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Part::One),
            "2" => Ok(Part::Two),
            other => Err(format!("invalid part: {other} (expected 1 or 2)")),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "part 1"),
            Part::Two => write!(f, "part 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_parses_plain_and_prefixed_numbers() {
        assert_eq!("2".parse::<Day>(), Ok(Day::Reports));
        assert_eq!("day5".parse::<Day>(), Ok(Day::PrintQueue));
        assert_eq!(" Day 10 ".parse::<Day>(), Ok(Day::Trails));
        assert!("3".parse::<Day>().is_err());
        assert!("ten".parse::<Day>().is_err());
    }

    #[test]
    fn part_parses_one_and_two_only() {
        assert_eq!("1".parse::<Part>(), Ok(Part::One));
        assert_eq!("2".parse::<Part>(), Ok(Part::Two));
        assert!("3".parse::<Part>().is_err());
    }
}
