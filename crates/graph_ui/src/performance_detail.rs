//! Widgets of the per-company score breakdown window.
//!
//! The window shows one row per score category and one selector button per
//! company slot. Both groups are sized from their domain bounds: the row
//! block from the category enum's cardinality, the button block from the
//! build-time company limit. The button block always spans the full limit,
//! not the live company count; the window layer hides buttons for empty
//! slots so ids stay stable while companies come and go.

use serde::{Deserialize, Serialize};
use strum::EnumCount;

use company::{CompanyId, MAX_COMPANIES};
use economy::ScoreCategory;

use crate::namespace::WindowNamespace;
use crate::widget::{WidgetId, WidgetRange};

/// Ids of the per-category score rows, one per [`ScoreCategory`].
pub const SCORE_WIDGETS: WidgetRange =
    WidgetRange::new(WidgetId::ZERO, ScoreCategory::COUNT as u16);

/// Ids of the company selector buttons, one per slot up to [`MAX_COMPANIES`].
pub const COMPANY_WIDGETS: WidgetRange = SCORE_WIDGETS.followed_by(MAX_COMPANIES as u16);

// The two blocks must never share an id.
const _: () = assert!(SCORE_WIDGETS.is_disjoint(COMPANY_WIDGETS));

/// Id of the score row for `category`.
pub const fn score_widget(category: ScoreCategory) -> WidgetId {
    SCORE_WIDGETS.at(category.index() as u16)
}

/// Id of the selector button for `company`.
pub const fn company_widget(company: CompanyId) -> WidgetId {
    COMPANY_WIDGETS.at(company.slot() as u16)
}

/// One widget of the breakdown window, tagged by the entity it stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceDetailWidget {
    /// Row showing one score category.
    Score(ScoreCategory),
    /// Button selecting the company whose scores are shown.
    Company(CompanyId),
}

impl PerformanceDetailWidget {
    /// Id of this widget within the window namespace.
    pub const fn id(self) -> WidgetId {
        match self {
            PerformanceDetailWidget::Score(category) => score_widget(category),
            PerformanceDetailWidget::Company(company) => company_widget(company),
        }
    }

    /// Recover the widget behind `id`, if it belongs to this namespace.
    pub fn from_id(id: WidgetId) -> Option<Self> {
        if let Some(slot) = SCORE_WIDGETS.slot_of(id) {
            return ScoreCategory::from_index(slot as u8).map(Self::Score);
        }
        if let Some(slot) = COMPANY_WIDGETS.slot_of(id) {
            return CompanyId::new(slot as u8).ok().map(Self::Company);
        }
        None
    }
}

/// Canonical layout registration of the breakdown window namespace.
pub fn namespace() -> WindowNamespace {
    WindowNamespace::new("performance_detail")
        .range("scores", SCORE_WIDGETS)
        .range("companies", COMPANY_WIDGETS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_score_block_matches_category_count() {
        assert_eq!(SCORE_WIDGETS.extent() as usize, ScoreCategory::COUNT);
    }

    #[test]
    fn test_company_block_matches_company_limit() {
        assert_eq!(COMPANY_WIDGETS.extent(), MAX_COMPANIES as u16);
    }

    #[test]
    fn test_score_round_trip() {
        for category in ScoreCategory::iter() {
            let id = score_widget(category);
            assert!(SCORE_WIDGETS.contains(id));
            assert_eq!(
                PerformanceDetailWidget::from_id(id),
                Some(PerformanceDetailWidget::Score(category)),
            );
        }
    }

    #[test]
    fn test_company_round_trip() {
        for company in CompanyId::iter() {
            let id = company_widget(company);
            assert!(COMPANY_WIDGETS.contains(id));
            assert_eq!(
                PerformanceDetailWidget::from_id(id),
                Some(PerformanceDetailWidget::Company(company)),
            );
        }
    }

    #[test]
    fn test_blocks_are_disjoint_and_contiguous() {
        assert!(SCORE_WIDGETS.is_disjoint(COMPANY_WIDGETS));
        assert_eq!(
            COMPANY_WIDGETS.first().raw(),
            SCORE_WIDGETS.last().raw() + 1,
        );
    }

    #[test]
    fn test_id_beyond_both_blocks_is_rejected() {
        let beyond = WidgetId::new(COMPANY_WIDGETS.last().raw() + 1);
        assert_eq!(PerformanceDetailWidget::from_id(beyond), None);
    }

    #[test]
    fn test_namespace_validates() {
        assert!(namespace().validate().is_ok());
    }
}
