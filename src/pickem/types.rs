use std::fmt;
use std::str::FromStr;

/// NFL conference. Stored as TEXT in the `teams` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conference {
    Afc,
    Nfc,
}

impl Conference {
    pub fn as_str(self) -> &'static str {
        match self {
            Conference::Afc => "AFC",
            Conference::Nfc => "NFC",
        }
    }
}

impl FromStr for Conference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AFC" => Ok(Conference::Afc),
            "NFC" => Ok(Conference::Nfc),
            other => Err(format!("unknown conference '{other}'")),
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Division within a conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    North,
    South,
    East,
    West,
}

impl Division {
    pub fn as_str(self) -> &'static str {
        match self {
            Division::North => "North",
            Division::South => "South",
            Division::East => "East",
            Division::West => "West",
        }
    }
}

impl FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" => Ok(Division::North),
            "south" => Ok(Division::South),
            "east" => Ok(Division::East),
            "west" => Ok(Division::West),
            other => Err(format!("unknown division '{other}'")),
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
