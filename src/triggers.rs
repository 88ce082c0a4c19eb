use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TableError;
use crate::types::{Degree, TriggerEntry};

const TICKER_PREFIX: &str = "KXVLADTENEVMENTION-25DEC17-";

/// (phrase, contract label, ticker suffix, degree)
const DEFAULT_TRIGGERS: &[(&str, &str, &str, u8)] = &[
    // direct contract words
    ("retirement", "Retirement", "RETI", 1),
    ("blockchain", "Blockchain", "BLOC", 1),
    ("bitcoin", "Bitcoin", "BITC", 1),
    ("election", "Election", "ELEC", 1),
    ("acquisition", "Acquisition", "ACQU", 1),
    ("acquired", "Acquisition", "ACQU", 1),
    ("economy", "Economy", "ECON", 1),
    ("economic", "Economy", "ECON", 1),
    ("kalshi", "Kalshi", "KALS", 1),
    ("susquehanna", "SIG", "SIG", 1),
    ("sig", "SIG", "SIG", 1),
    ("tokenization", "Tokenization", "TOKE", 1),
    ("tokenized", "Tokenization", "TOKE", 1),
    ("sport", "Sport", "SPOR", 1),
    ("innovation", "Innovation", "INNO", 1),
    ("innovate", "Innovation", "INNO", 1),
    ("gold", "Gold", "GOLD", 1),
    // what the speaker actually says
    ("crypto", "Bitcoin", "BITC", 2),
    ("btc", "Bitcoin", "BITC", 2),
    ("solana", "Bitcoin", "BITC", 2),
    ("ethereum", "Bitcoin", "BITC", 2),
    ("coinbase", "Bitcoin", "BITC", 2),
    ("bitstamp", "Acquisition", "ACQU", 2),
    ("x1", "Acquisition", "ACQU", 2),
    ("drivewealth", "Acquisition", "ACQU", 2),
    ("merger", "Acquisition", "ACQU", 2),
    ("deal", "Acquisition", "ACQU", 2),
    ("prediction market", "Kalshi", "KALS", 2),
    ("polymarket", "Kalshi", "KALS", 2),
    ("event contracts", "Kalshi", "KALS", 2),
    ("robinhood gold", "Innovation", "INNO", 2),
    ("legend", "Innovation", "INNO", 2),
    ("cortex", "Innovation", "INNO", 2),
    ("staking", "Tokenization", "TOKE", 2),
    ("roth ira", "Retirement", "RETI", 2),
    ("401k", "Retirement", "RETI", 2),
    ("ira", "Retirement", "RETI", 2),
    ("smart contract", "Blockchain", "BLOC", 2),
    ("layer 1", "Blockchain", "BLOC", 2),
    ("gdp", "Economy", "ECON", 2),
    ("inflation", "Economy", "ECON", 2),
    ("fed", "Economy", "ECON", 2),
    ("nfl", "Sport", "SPOR", 2),
    ("nba", "Sport", "SPOR", 2),
    ("super bowl", "Sport", "SPOR", 2),
];

/// Phrase → contract table. Iteration order is configuration order and is
/// the order in which the matcher reports events.
#[derive(Debug, Clone, Default)]
pub struct TriggerTable {
    entries: Vec<TriggerEntry>,
}

impl TriggerTable {
    pub fn default_table() -> Self {
        let entries = DEFAULT_TRIGGERS
            .iter()
            .map(|&(phrase, contract, suffix, degree)| TriggerEntry {
                phrase: phrase.to_string(),
                contract_label: contract.to_string(),
                target_id: format!("{TICKER_PREFIX}{suffix}"),
                degree: if degree == 1 { Degree::Direct } else { Degree::Indirect },
            })
            .collect();
        Self { entries }
    }

    /// Build from entries, rejecting empty or repeated phrases.
    /// Phrases are normalized to trimmed lowercase first.
    pub fn from_entries(mut entries: Vec<TriggerEntry>) -> Result<Self, TableError> {
        for entry in &mut entries {
            entry.phrase = entry.phrase.trim().to_lowercase();
        }
        {
            let mut seen = HashSet::with_capacity(entries.len());
            for entry in &entries {
                if entry.phrase.trim().is_empty() {
                    return Err(TableError::EmptyPhrase);
                }
                if !seen.insert(entry.phrase.as_str()) {
                    return Err(TableError::DuplicatePhrase(entry.phrase.clone()));
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TriggerEntry> {
        self.entries.iter()
    }

    pub fn get(&self, phrase: &str) -> Option<&TriggerEntry> {
        self.entries.iter().find(|e| e.phrase == phrase)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Phrases grouped per contract label, labels sorted.
    pub fn by_contract(&self) -> BTreeMap<String, ContractGroup> {
        let mut groups: BTreeMap<String, ContractGroup> = BTreeMap::new();
        for entry in &self.entries {
            let group = groups
                .entry(entry.contract_label.clone())
                .or_insert_with(|| ContractGroup {
                    target_id: entry.target_id.clone(),
                    first: Vec::new(),
                    second: Vec::new(),
                });
            match entry.degree {
                Degree::Direct => group.first.push(entry.phrase.clone()),
                Degree::Indirect => group.second.push(entry.phrase.clone()),
            }
        }
        groups
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractGroup {
    pub target_id: String,
    pub first: Vec<String>,
    pub second: Vec<String>,
}

#[derive(Deserialize)]
struct RawEntry {
    contract: String,
    ticker: String,
    #[serde(default = "default_degree")]
    degree: u64,
}

fn default_degree() -> u64 {
    1
}

/// Every key/value pair of a JSON object in document order, repeats included.
/// `serde_json::Value` would keep only the last of two identical keys.
struct KeyedEntries(Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for KeyedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = KeyedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object keyed by phrase")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<KeyedEntries, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, serde_json::Value>()? {
                    pairs.push((key, value));
                }
                Ok(KeyedEntries(pairs))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parse a JSON trigger map of the form
/// `{"bitcoin": {"contract": "Bitcoin", "ticker": "...", "degree": 1}}`.
///
/// Phrases are trimmed and lowercased. Key order is preserved, and a phrase
/// repeated in the document is rejected like any other duplicate. The caller
/// decides what to do on error; nothing here falls back to the defaults.
pub fn parse_table(text: &str) -> Result<TriggerTable, TableError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(TableError::NotAnObject);
    }
    let KeyedEntries(pairs) = serde_json::from_str(text)?;

    let mut entries = Vec::with_capacity(pairs.len());
    for (key, raw) in pairs {
        let phrase = key.trim().to_lowercase();
        if phrase.is_empty() {
            return Err(TableError::EmptyPhrase);
        }

        let raw: RawEntry = serde_json::from_value(raw).map_err(|e| {
            TableError::InvalidEntry { phrase: phrase.clone(), reason: e.to_string() }
        })?;

        let degree = u8::try_from(raw.degree)
            .ok()
            .and_then(|d| Degree::try_from(d).ok())
            .ok_or_else(|| TableError::InvalidDegree { phrase: phrase.clone(), degree: raw.degree })?;

        if raw.ticker.trim().is_empty() {
            return Err(TableError::InvalidEntry { phrase, reason: "empty ticker".into() });
        }

        entries.push(TriggerEntry {
            phrase,
            contract_label: raw.contract,
            target_id: raw.ticker,
            degree,
        });
    }

    TriggerTable::from_entries(entries)
}
