//! Defines the core data models for transactions and the fixed sets of
//! subsidiaries, sectors and transaction types used to partition them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

// ============================================================================
// ENUMERATIONS
// ============================================================================

/// The error returned when a string does not name a member of one of the fixed sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" is not a valid {}", self.value, self.kind)
    }
}

impl std::error::Error for UnknownVariant {}

/// An organisational branch used to partition budget data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subsidiary {
    #[serde(rename = "Branch A")]
    BranchA,
    #[serde(rename = "Branch B")]
    BranchB,
    #[serde(rename = "Branch C")]
    BranchC,
}

impl Subsidiary {
    /// Every subsidiary, in display order.
    pub const ALL: [Subsidiary; 3] = [Subsidiary::BranchA, Subsidiary::BranchB, Subsidiary::BranchC];

    /// The name used by the budget API.
    pub fn as_str(self) -> &'static str {
        match self {
            Subsidiary::BranchA => "Branch A",
            Subsidiary::BranchB => "Branch B",
            Subsidiary::BranchC => "Branch C",
        }
    }
}

/// A functional department used to partition budget data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "R&D")]
    ResearchAndDevelopment,
    Marketing,
    #[serde(rename = "HR")]
    HumanResources,
    Operations,
    #[serde(rename = "IT")]
    InformationTechnology,
}

impl Sector {
    /// Every sector, in display order.
    pub const ALL: [Sector; 5] = [
        Sector::ResearchAndDevelopment,
        Sector::Marketing,
        Sector::HumanResources,
        Sector::Operations,
        Sector::InformationTechnology,
    ];

    /// The name used by the budget API.
    pub fn as_str(self) -> &'static str {
        match self {
            Sector::ResearchAndDevelopment => "R&D",
            Sector::Marketing => "Marketing",
            Sector::HumanResources => "HR",
            Sector::Operations => "Operations",
            Sector::InformationTechnology => "IT",
        }
    }
}

/// Whether a transaction credits or debits the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Credit,
    Debit,
}

impl TransactionType {
    /// Every transaction type, in display order.
    pub const ALL: [TransactionType; 2] = [TransactionType::Credit, TransactionType::Debit];

    /// The name used by the budget API.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Credit => "Credit",
            TransactionType::Debit => "Debit",
        }
    }
}

macro_rules! impl_name_conversions {
    ($type_:ty, $kind:literal) => {
        impl fmt::Display for $type_ {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $type_ {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| UnknownVariant::new($kind, s))
            }
        }
    };
}

impl_name_conversions!(Subsidiary, "subsidiary");
impl_name_conversions!(Sector, "sector");
impl_name_conversions!(TransactionType, "transaction type");

// ============================================================================
// MODELS
// ============================================================================

/// A single budget-affecting record as stored by the budget API.
///
/// The field names on the wire follow the API's column names, e.g.
/// `Transaction_ID` and `Allocated_Budget`.
///
/// To create a new `Transaction`, fill out a [TransactionBuilder] and call
/// [TransactionBuilder::finalise] so that the remaining budget is derived
/// rather than entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The unique identifier, used as the key for updates and deletes.
    #[serde(rename = "Transaction_ID")]
    pub id: String,
    /// When the transaction happened.
    #[serde(rename = "Date")]
    pub date: Date,
    #[serde(rename = "Subsidiary")]
    pub subsidiary: Subsidiary,
    #[serde(rename = "Sector")]
    pub sector: Sector,
    /// The user that recorded the transaction.
    #[serde(rename = "User_ID")]
    pub user_id: String,
    #[serde(rename = "Allocated_Budget")]
    pub allocated_budget: f64,
    #[serde(rename = "Spent_Amount")]
    pub spent_amount: f64,
    /// Allocated budget minus spent amount, as computed when the transaction
    /// was created.
    #[serde(rename = "Remaining_Budget")]
    pub remaining_budget: f64,
    #[serde(rename = "Revenue_Generated")]
    pub revenue_generated: f64,
    #[serde(rename = "Transaction_Type")]
    pub transaction_type: TransactionType,
}

/// The user-entered fields of a new [Transaction].
///
/// The remaining budget is not part of the builder, it is always derived from
/// the allocated budget and spent amount in [TransactionBuilder::finalise].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    pub id: String,
    pub date: Date,
    pub subsidiary: Subsidiary,
    pub sector: Sector,
    pub user_id: String,
    pub allocated_budget: f64,
    pub spent_amount: f64,
    pub revenue_generated: f64,
    pub transaction_type: TransactionType,
}

impl TransactionBuilder {
    /// Check the required fields and amounts, then create the [Transaction]
    /// with `remaining_budget = allocated_budget - spent_amount`.
    ///
    /// # Errors
    /// Returns [Error::MissingField] if the transaction ID or user ID is blank,
    /// or [Error::NegativeAmount] if any amount is negative or not a number.
    pub fn finalise(self) -> Result<Transaction, Error> {
        let id = require_text(self.id, "Transaction ID")?;
        let user_id = require_text(self.user_id, "User ID")?;
        let allocated_budget = require_non_negative(self.allocated_budget, "Allocated Budget")?;
        let spent_amount = require_non_negative(self.spent_amount, "Spent Amount")?;
        let revenue_generated = require_non_negative(self.revenue_generated, "Revenue Generated")?;

        Ok(Transaction {
            id,
            date: self.date,
            subsidiary: self.subsidiary,
            sector: self.sector,
            user_id,
            allocated_budget,
            spent_amount,
            remaining_budget: allocated_budget - spent_amount,
            revenue_generated,
            transaction_type: self.transaction_type,
        })
    }
}

/// A partial update of a [Transaction].
///
/// Only the fields that are `Some` are sent to the budget API, so fields the
/// user did not choose to update are left untouched. The remaining budget is
/// not part of a patch: the API keeps the value computed at creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionPatch {
    #[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    #[serde(rename = "Subsidiary", skip_serializing_if = "Option::is_none")]
    pub subsidiary: Option<Subsidiary>,
    #[serde(rename = "Sector", skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,
    #[serde(rename = "Allocated_Budget", skip_serializing_if = "Option::is_none")]
    pub allocated_budget: Option<f64>,
    #[serde(rename = "Spent_Amount", skip_serializing_if = "Option::is_none")]
    pub spent_amount: Option<f64>,
    #[serde(rename = "Revenue_Generated", skip_serializing_if = "Option::is_none")]
    pub revenue_generated: Option<f64>,
    #[serde(rename = "Transaction_Type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
}

pub(crate) fn require_text(value: String, field: &'static str) -> Result<String, Error> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(Error::MissingField(field));
    }

    Ok(trimmed.to_owned())
}

pub(crate) fn require_non_negative(amount: f64, field: &'static str) -> Result<f64, Error> {
    // `!(amount >= 0.0)` also rejects NaN.
    if !(amount >= 0.0) || amount.is_infinite() {
        return Err(Error::NegativeAmount(field));
    }

    Ok(amount)
}
