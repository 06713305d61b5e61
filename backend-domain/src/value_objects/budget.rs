// Budget value object

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("budget '{0}' is not a number")]
    NotANumber(String),
    #[error("budget must be >= 0")]
    Negative,
}

// Form input is always a non-negative amount. Stored text that is not a
// number stays as `Unparsed` and is written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Budget {
    Amount(f64),
    Unparsed(String),
}

impl Default for Budget {
    fn default() -> Self {
        Budget::Amount(0.0)
    }
}

impl Budget {
    pub fn new(amount: f64) -> Result<Self, BudgetError> {
        if !amount.is_finite() {
            return Err(BudgetError::NotANumber(amount.to_string()));
        }
        if amount < 0.0 {
            return Err(BudgetError::Negative);
        }
        Ok(Budget::Amount(amount))
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Budget::Amount(amount) => Some(*amount),
            Budget::Unparsed(_) => None,
        }
    }
}

fn is_whole(amount: f64) -> bool {
    amount.fract() == 0.0 && amount.abs() < 9_007_199_254_740_992.0
}

impl FromStr for Budget {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let amount = trimmed
            .parse::<f64>()
            .map_err(|_| BudgetError::NotANumber(trimmed.to_string()))?;
        Budget::new(amount)
    }
}

impl Serialize for Budget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Budget::Amount(amount) if is_whole(*amount) => serializer.serialize_i64(*amount as i64),
            Budget::Amount(amount) => serializer.serialize_f64(*amount),
            Budget::Unparsed(text) => serializer.serialize_str(text),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBudget {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Budget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let budget = match StoredBudget::deserialize(deserializer)? {
            StoredBudget::Number(amount) => Budget::Amount(amount),
            StoredBudget::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Budget::default()
                } else {
                    match trimmed.parse::<f64>() {
                        Ok(amount) if amount.is_finite() => Budget::Amount(amount),
                        _ => Budget::Unparsed(text),
                    }
                }
            }
        };
        Ok(budget)
    }
}
