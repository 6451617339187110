//! Score categories of the company performance rating.
//!
//! This crate holds the static vocabulary of the rating system: which
//! categories exist, in which order they are shown, and what a company has
//! to achieve for full marks in each of them. The simulation that produces
//! the actual scored values lives elsewhere.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr};

/// One category of company performance.
///
/// The variant order is part of the contract: score tables and the per-row
/// widgets of the detail window are indexed by position, so new categories
/// must be appended, not inserted.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    FromRepr,
)]
#[repr(u8)]
pub enum ScoreCategory {
    /// Vehicles that turned a profit in the last year.
    Vehicles,
    /// Station parts owned by the company.
    Stations,
    /// Lowest profit among vehicles older than two years.
    MinProfit,
    /// Lowest quarterly income of the last twelve quarters.
    MinIncome,
    /// Highest quarterly income of the last twelve quarters.
    MaxIncome,
    /// Cargo units delivered over the last four quarters.
    Delivered,
    /// Distinct cargo kinds delivered in the last quarter.
    Cargo,
    /// Money in the bank.
    Money,
    /// Remaining loan, scored inversely.
    Loan,
    /// Weighted sum over all other categories.
    Total,
}

impl ScoreCategory {
    /// Position of the category in display order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`ScoreCategory::index`].
    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }

    /// Requirement and weight of this category.
    pub const fn goal(self) -> ScoreGoal {
        match self {
            ScoreCategory::Vehicles => ScoreGoal::new(120, 100),
            ScoreCategory::Stations => ScoreGoal::new(80, 100),
            ScoreCategory::MinProfit => ScoreGoal::new(10_000, 100),
            ScoreCategory::MinIncome => ScoreGoal::new(50_000, 50),
            ScoreCategory::MaxIncome => ScoreGoal::new(100_000, 100),
            ScoreCategory::Delivered => ScoreGoal::new(40_000, 400),
            ScoreCategory::Cargo => ScoreGoal::new(8, 50),
            ScoreCategory::Money => ScoreGoal::new(10_000_000, 50),
            ScoreCategory::Loan => ScoreGoal::new(250_000, 50),
            // The aggregate row has no requirement of its own.
            ScoreCategory::Total => ScoreGoal::new(0, 0),
        }
    }
}

/// Requirement a company must meet for full marks in one category, and the
/// weight the category contributes to the overall rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreGoal {
    /// Value needed for the full score.
    pub needed: i64,
    /// Points awarded when the requirement is met in full.
    pub score: u16,
}

impl ScoreGoal {
    const fn new(needed: i64, score: u16) -> Self {
        ScoreGoal { needed, score }
    }
}

/// Maximum number of rating points a company can accumulate.
pub const SCORE_MAX: u16 = 1000;
