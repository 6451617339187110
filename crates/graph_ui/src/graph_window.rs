//! Widgets of the performance graph window.
//!
//! The graph window and the views derived from it (operating profit, income,
//! delivered cargo, performance history, company value) share one namespace
//! of always-present regions, so every variant maps to exactly one id and no
//! range arithmetic is involved.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

use crate::namespace::WindowNamespace;
use crate::widget::WidgetId;

/// Fixed widgets of the graph window.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumCount,
    EnumIter,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u16)]
pub enum GraphWidget {
    /// Background of the window.
    Background,
    /// The plotted graph itself.
    Graph,
    /// Resize grip.
    Resize,
    /// Caption above the graph.
    Header,
    /// Legend line below the graph.
    Footer,
    /// Button opening the per-company score breakdown window.
    DetailedPerformance,
}

impl GraphWidget {
    /// Id of this widget within the graph window namespace.
    pub const fn id(self) -> WidgetId {
        WidgetId::new(self as u16)
    }

    /// Recover the widget behind `id`, if it belongs to this namespace.
    pub fn from_id(id: WidgetId) -> Option<Self> {
        Self::from_repr(id.raw())
    }
}

/// Canonical layout registration of the graph window namespace.
pub fn namespace() -> WindowNamespace {
    GraphWidget::iter().fold(WindowNamespace::new("graph"), |ns, widget| {
        ns.widget(widget.into(), widget.id())
    })
}
