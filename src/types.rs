use serde::{Deserialize, Serialize, Serializer};

/// How directly a trigger phrase names its contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    Direct,   // 1 — the contract word itself
    Indirect, // 2 — associative word the speaker actually uses
}

impl Degree {
    pub fn as_u8(self) -> u8 {
        match self {
            Degree::Direct => 1,
            Degree::Indirect => 2,
        }
    }
}

impl TryFrom<u8> for Degree {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(Degree::Direct),
            2 => Ok(Degree::Indirect),
            other => Err(other),
        }
    }
}

impl Serialize for Degree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl std::fmt::Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Degree::Direct => write!(f, "1st"),
            Degree::Indirect => write!(f, "2nd"),
        }
    }
}

/// One configured phrase and the contract it points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerEntry {
    pub phrase: String,
    pub contract_label: String,
    pub target_id: String,
    pub degree: Degree,
}

/// A phrase detected in a transcript that passed the negation guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerEvent {
    pub phrase: String,
    pub contract_label: String,
    pub target_id: String,
    pub degree: Degree,
    pub timestamp: String,
    pub context: String,
}

impl std::fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" → {} ({}, {} degree)",
            self.phrase, self.contract_label, self.target_id, self.degree
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub timestamp: String,
    pub text: String,
}

/// Phrase matching strictness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Phrase word may sit anywhere inside a token ("sig" hits "signature")
    #[default]
    Substring,
    /// Token, stripped of edge punctuation, must equal the phrase word
    WholeWord,
}

impl MatchMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "substring" => Some(Self::Substring),
            "whole_word" | "whole-word" | "word" => Some(Self::WholeWord),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Substring => write!(f, "substring"),
            MatchMode::WholeWord => write!(f, "whole_word"),
        }
    }
}

/// Local wall-clock stamp used on transcripts, triggers and trades
pub fn clock_stamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
