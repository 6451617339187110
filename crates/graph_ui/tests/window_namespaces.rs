//! Integration tests for the window identifier namespaces:
//! - Dynamic group extents match their domain bounds
//! - Entity-to-widget lookups round-trip in both directions
//! - No id is shared between groups of one window
//! - Range derivation matches the documented layout numbers

use company::{CompanyId, MAX_COMPANIES};
use economy::ScoreCategory;
use strum::{EnumCount, IntoEnumIterator};

use graph_ui::{
    graph_window, performance_detail, GraphWidget, PerformanceDetailWidget, WidgetId, WidgetRange,
};

#[test]
fn score_group_spans_exactly_the_category_set() {
    let range = performance_detail::SCORE_WIDGETS;
    assert_eq!(range.extent() as usize, ScoreCategory::COUNT);
    assert_eq!(
        range.last().raw() - range.first().raw() + 1,
        ScoreCategory::COUNT as u16
    );
}

#[test]
fn company_group_spans_exactly_the_company_limit() {
    let range = performance_detail::COMPANY_WIDGETS;
    assert_eq!(range.extent(), MAX_COMPANIES as u16);
    assert_eq!(
        range.last().raw() - range.first().raw() + 1,
        MAX_COMPANIES as u16
    );
}

#[test]
fn every_category_maps_into_the_score_group_and_back() {
    for category in ScoreCategory::iter() {
        let id = performance_detail::score_widget(category);
        assert!(performance_detail::SCORE_WIDGETS.contains(id));
        assert_eq!(
            PerformanceDetailWidget::from_id(id),
            Some(PerformanceDetailWidget::Score(category))
        );
    }
}

#[test]
fn every_company_slot_maps_into_the_company_group_and_back() {
    for company in CompanyId::iter() {
        let id = performance_detail::company_widget(company);
        assert!(performance_detail::COMPANY_WIDGETS.contains(id));
        assert_eq!(
            PerformanceDetailWidget::from_id(id),
            Some(PerformanceDetailWidget::Company(company))
        );
    }
}

#[test]
fn no_id_is_shared_within_a_window() {
    // Graph window: six fixed widgets, all distinct.
    let mut graph_ids: Vec<WidgetId> = GraphWidget::iter().map(GraphWidget::id).collect();
    graph_ids.sort();
    graph_ids.dedup();
    assert_eq!(graph_ids.len(), GraphWidget::COUNT);

    // Breakdown window: the two dynamic groups never touch.
    assert!(performance_detail::SCORE_WIDGETS.is_disjoint(performance_detail::COMPANY_WIDGETS));

    // The declared layouts agree.
    assert!(graph_window::namespace().validate().is_ok());
    assert!(performance_detail::namespace().validate().is_ok());
}

#[test]
fn range_derivation_matches_the_documented_layout() {
    // Five score rows anchored at 10 end at 14; fifteen company buttons
    // follow at 15 and end at 29.
    let scores = WidgetRange::new(WidgetId::new(10), 5);
    assert_eq!(scores.last(), WidgetId::new(14));

    let companies = scores.followed_by(15);
    assert_eq!(companies.first(), WidgetId::new(15));
    assert_eq!(companies.last(), WidgetId::new(29));

    // Category position 3 sits on id 13 and resolves back to position 3.
    assert_eq!(scores.at(3), WidgetId::new(13));
    assert_eq!(scores.slot_of(WidgetId::new(13)), Some(3));

    // Company slot 0 sits on id 15 and resolves back to slot 0.
    assert_eq!(companies.at(0), WidgetId::new(15));
    assert_eq!(companies.slot_of(WidgetId::new(15)), Some(0));
}

#[test]
fn ids_outside_every_group_resolve_to_nothing() {
    let beyond = WidgetId::new(performance_detail::COMPANY_WIDGETS.last().raw() + 1);
    assert_eq!(PerformanceDetailWidget::from_id(beyond), None);
    assert_eq!(GraphWidget::from_id(WidgetId::new(u16::MAX)), None);
}
