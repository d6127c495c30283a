use std::{collections::HashSet, ops::Deref};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Currencies whose amounts are already expressed in the major unit
const ZERO_DECIMAL_CURRENCIES: [&str; 3] = ["jpy", "krw", "clp"];

/// A subscription plan as offered on the pricing section. Only built through
/// `TryFrom`, so every instance has passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanItem {
    pub id: String,
    pub name: Option<String>,
    /// Price in the currency's minor unit
    pub amount: i64,
    /// Lower case ISO 4217 code
    pub currency: String,
    pub interval: String,
    pub popular: bool,
    pub features: Vec<String>,
}

/// The plan record as it comes off the wire. Every field is optional here so
/// a bad record can be reported precisely instead of failing to parse
#[derive(Debug, Default, Deserialize)]
struct RawPlanItem {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    amount: Option<i64>,
    #[serde(default)]
    unit_amount: Option<i64>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    interval: Option<String>,
    #[serde(default)]
    popular: Option<bool>,
    #[serde(default)]
    features: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum PlanRejection {
    #[error("plan record is not a valid object: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("plan record has no id")]
    MissingId,
    #[error("plan {id} has no amount")]
    MissingAmount { id: String },
    #[error("plan {id} has a negative amount: {amount}")]
    NegativeAmount { id: String, amount: i64 },
    #[error("plan {id} has an invalid currency: {currency:?}")]
    InvalidCurrency { id: String, currency: Option<String> },
}

impl TryFrom<RawPlanItem> for PlanItem {
    type Error = PlanRejection;

    fn try_from(raw: RawPlanItem) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or(PlanRejection::MissingId)?;

        let amount = raw
            .amount
            .or(raw.unit_amount)
            .ok_or_else(|| PlanRejection::MissingAmount { id: id.clone() })?;
        if amount < 0 {
            return Err(PlanRejection::NegativeAmount { id, amount });
        }

        let currency = match raw.currency {
            Some(c) if c.len() == 3 && c.chars().all(|c| c.is_ascii_alphabetic()) => {
                c.to_ascii_lowercase()
            },
            currency => return Err(PlanRejection::InvalidCurrency { id, currency }),
        };

        Ok(PlanItem {
            id,
            name: raw.name.or(raw.nickname).filter(|n| !n.trim().is_empty()),
            amount,
            currency,
            interval: raw.interval.unwrap_or_else(|| "month".to_string()),
            popular: raw.popular.unwrap_or(false),
            features: raw.features.unwrap_or_default(),
        })
    }
}

impl TryFrom<Value> for PlanItem {
    type Error = PlanRejection;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value::<RawPlanItem>(value)?.try_into()
    }
}

impl PlanItem {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Price formatted for display, e.g. `R$ 29,90` or `$12.00`
    pub fn display_price(&self) -> String {
        if ZERO_DECIMAL_CURRENCIES.contains(&self.currency.as_str()) {
            return format!("{} {}", self.amount, self.currency.to_ascii_uppercase());
        }

        let major = self.amount / 100;
        let minor = self.amount % 100;
        match self.currency.as_str() {
            "brl" => format!("R$ {major},{minor:02}"),
            "usd" => format!("${major}.{minor:02}"),
            "eur" => format!("€{major}.{minor:02}"),
            "gbp" => format!("£{major}.{minor:02}"),
            other => format!("{major}.{minor:02} {}", other.to_ascii_uppercase()),
        }
    }

    pub fn display_interval(&self) -> &str {
        match self.interval.as_str() {
            "day" => "dia",
            "week" => "semana",
            "month" => "mês",
            "year" => "ano",
            other => other,
        }
    }
}

/// The ordered, validated plans to render. Ids are unique
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanList(Vec<PlanItem>);

impl PlanList {
    /// Build the list from a get-plans payload (`{ "items": [...] }`)
    ///
    /// A missing or non-array `items` gives an empty list. Records that fail
    /// validation and repeated ids are skipped with a warning
    pub fn from_payload(payload: &Value) -> Self {
        let items = match payload.get("items") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                warn!("get-plans payload `items` is not an array: {other}");
                return Self::default();
            },
            None => {
                debug!("get-plans payload has no `items`");
                return Self::default();
            },
        };

        Self::from_records(items.iter().cloned())
    }

    pub fn from_records<I: IntoIterator<Item = Value>>(records: I) -> Self {
        let mut seen = HashSet::new();
        let mut plans = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            match PlanItem::try_from(record) {
                Ok(plan) if seen.contains(&plan.id) => {
                    warn!("Skipping plan record {index}: duplicate id {}", plan.id);
                },
                Ok(plan) => {
                    seen.insert(plan.id.clone());
                    plans.push(plan);
                },
                Err(e) => warn!("Skipping plan record {index}: {e}"),
            }
        }

        Self(plans)
    }
}

impl Deref for PlanList {
    type Target = [PlanItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for PlanList {
    type Item = PlanItem;
    type IntoIter = std::vec::IntoIter<PlanItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
