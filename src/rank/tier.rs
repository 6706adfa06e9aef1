//! Skill tiers and divisions
//!
//! Both enumerations are declared weakest first, so the derived `Ord` is the
//! competitive ordering.

use crate::error::RankError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the ten named skill tiers, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "FERRO")]
    Ferro,
    #[serde(rename = "BRONZE")]
    Bronze,
    #[serde(rename = "PRATA")]
    Prata,
    #[serde(rename = "OURO")]
    Ouro,
    #[serde(rename = "PLATINA")]
    Platina,
    #[serde(rename = "ESMERALDA")]
    Esmeralda,
    #[serde(rename = "DIAMANTE")]
    Diamante,
    #[serde(rename = "MESTRE")]
    Mestre,
    #[serde(rename = "GRÃO-MESTRE", alias = "GRAO-MESTRE")]
    GraoMestre,
    #[serde(rename = "DESAFIANTE")]
    Desafiante,
}

impl Tier {
    /// All tiers in ascending order
    pub const ALL: [Tier; 10] = [
        Tier::Ferro,
        Tier::Bronze,
        Tier::Prata,
        Tier::Ouro,
        Tier::Platina,
        Tier::Esmeralda,
        Tier::Diamante,
        Tier::Mestre,
        Tier::GraoMestre,
        Tier::Desafiante,
    ];

    /// Lowest tier of the ladder
    pub const LOWEST: Tier = Tier::Ferro;

    /// Highest tier of the ladder
    pub const HIGHEST: Tier = Tier::Desafiante;

    /// Position in the ascending tier sequence (0 = FERRO, 9 = DESAFIANTE)
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Tier at a position of the ascending sequence
    pub fn from_rank(index: u8) -> Option<Tier> {
        Self::ALL.get(index as usize).copied()
    }

    /// Whether the tier is split into divisions.
    ///
    /// The seven lowest tiers are divided; MESTRE and above only use points.
    pub const fn has_divisions(self) -> bool {
        !matches!(self, Tier::Mestre | Tier::GraoMestre | Tier::Desafiante)
    }

    /// Display name, as used in payloads
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Ferro => "FERRO",
            Tier::Bronze => "BRONZE",
            Tier::Prata => "PRATA",
            Tier::Ouro => "OURO",
            Tier::Platina => "PLATINA",
            Tier::Esmeralda => "ESMERALDA",
            Tier::Diamante => "DIAMANTE",
            Tier::Mestre => "MESTRE",
            Tier::GraoMestre => "GRÃO-MESTRE",
            Tier::Desafiante => "DESAFIANTE",
        }
    }

    /// English name used by the Riot API and the ranked emblem assets
    pub const fn english_name(self) -> &'static str {
        match self {
            Tier::Ferro => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Prata => "SILVER",
            Tier::Ouro => "GOLD",
            Tier::Platina => "PLATINUM",
            Tier::Esmeralda => "EMERALD",
            Tier::Diamante => "DIAMOND",
            Tier::Mestre => "MASTER",
            Tier::GraoMestre => "GRANDMASTER",
            Tier::Desafiante => "CHALLENGER",
        }
    }

    /// Presentation token for the tier.
    ///
    /// Every tier has its own entry; there is no fallback.
    pub const fn color_class(self) -> &'static str {
        match self {
            Tier::Ferro => "text-gray-600",
            Tier::Bronze => "text-amber-700",
            Tier::Prata => "text-gray-400",
            Tier::Ouro => "text-yellow-500",
            Tier::Platina => "text-cyan-500",
            Tier::Esmeralda => "text-emerald-500",
            Tier::Diamante => "text-blue-500",
            Tier::Mestre => "text-purple-500",
            Tier::GraoMestre => "text-red-500",
            Tier::Desafiante => "text-amber-400",
        }
    }

    /// Lowercase emblem name (`iron`, `grandmaster`, ...)
    pub fn emblem_slug(self) -> String {
        self.english_name().to_lowercase()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = RankError;

    /// Accepts the Portuguese names (with or without the tilde) and the
    /// English names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('Ã', "A").replace([' ', '_'], "-");

        let tier = match normalized.as_str() {
            "FERRO" | "IRON" => Tier::Ferro,
            "BRONZE" => Tier::Bronze,
            "PRATA" | "SILVER" => Tier::Prata,
            "OURO" | "GOLD" => Tier::Ouro,
            "PLATINA" | "PLATINUM" => Tier::Platina,
            "ESMERALDA" | "EMERALD" => Tier::Esmeralda,
            "DIAMANTE" | "DIAMOND" => Tier::Diamante,
            "MESTRE" | "MASTER" => Tier::Mestre,
            "GRAO-MESTRE" | "GRAOMESTRE" | "GRANDMASTER" => Tier::GraoMestre,
            "DESAFIANTE" | "CHALLENGER" => Tier::Desafiante,
            _ => {
                return Err(RankError::UnknownTier {
                    value: s.to_string(),
                })
            }
        };

        Ok(tier)
    }
}

/// Sub-level of a divided tier, weakest (IV) first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "IV")]
    Four,
    #[serde(rename = "III")]
    Three,
    #[serde(rename = "II")]
    Two,
    #[serde(rename = "I")]
    One,
}

impl Division {
    /// All divisions from weakest to strongest
    pub const ALL: [Division; 4] = [Division::Four, Division::Three, Division::Two, Division::One];

    /// Weakest division of a tier
    pub const WEAKEST: Division = Division::Four;

    /// Strongest division of a tier
    pub const STRONGEST: Division = Division::One;

    /// Position from weakest to strongest (IV = 0, I = 3)
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Division at a position of the weak-to-strong sequence
    pub fn from_rank(index: u8) -> Option<Division> {
        Self::ALL.get(index as usize).copied()
    }

    /// Roman numeral label
    pub const fn as_str(self) -> &'static str {
        match self {
            Division::Four => "IV",
            Division::Three => "III",
            Division::Two => "II",
            Division::One => "I",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "IV" | "4" => Ok(Division::Four),
            "III" | "3" => Ok(Division::Three),
            "II" | "2" => Ok(Division::Two),
            "I" | "1" => Ok(Division::One),
            _ => Err(RankError::UnknownDivision {
                value: s.to_string(),
            }),
        }
    }
}
