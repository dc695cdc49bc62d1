//! Group (trip) status derivation.
//!
//! A group's user-facing status is computed on read from its milestone flags
//! and registration date. It is never persisted; the `status` column on the
//! `groups` table is a manually-set label and does not participate here.
//!
//! Rules are evaluated top to bottom and the first match wins.

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Derived lifecycle status of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    Planning,
    RegistrationOpen,
    PaymentPending,
    ContractSent,
    Confirmed,
}

impl GroupStatus {
    /// Every status, in rule-table order followed by the fallback.
    pub const ALL: [GroupStatus; 5] = [
        GroupStatus::Confirmed,
        GroupStatus::ContractSent,
        GroupStatus::PaymentPending,
        GroupStatus::RegistrationOpen,
        GroupStatus::Planning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GroupStatus::Planning => "planning",
            GroupStatus::RegistrationOpen => "registration_open",
            GroupStatus::PaymentPending => "payment_pending",
            GroupStatus::ContractSent => "contract_sent",
            GroupStatus::Confirmed => "confirmed",
        }
    }

    /// Parse a snake_case status name (as used in `?status=` filters).
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of a group's fields that status derivation reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Milestones {
    pub contract_signed: bool,
    pub contract_sent: bool,
    pub money_collection_started: bool,
    pub registration_date: Option<Date>,
}

type Rule = fn(&Milestones, Date) -> bool;

fn contract_signed(m: &Milestones, _: Date) -> bool {
    m.contract_signed
}

fn contract_sent(m: &Milestones, _: Date) -> bool {
    m.contract_sent
}

fn money_collection_started(m: &Milestones, _: Date) -> bool {
    m.money_collection_started
}

fn registration_open(m: &Milestones, today: Date) -> bool {
    m.registration_date.is_some_and(|d| d <= today)
}

const RULES: &[(Rule, GroupStatus)] = &[
    (contract_signed, GroupStatus::Confirmed),
    (contract_sent, GroupStatus::ContractSent),
    (money_collection_started, GroupStatus::PaymentPending),
    (registration_open, GroupStatus::RegistrationOpen),
];

/// Derive the status of a group as of `today`.
pub fn derive_status(milestones: &Milestones, today: Date) -> GroupStatus {
    RULES
        .iter()
        .find(|(rule, _)| rule(milestones, today))
        .map(|(_, status)| *status)
        .unwrap_or(GroupStatus::Planning)
}
