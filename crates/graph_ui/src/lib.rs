//! Widget identifier namespaces for the company performance windows.
//!
//! The crate names every interactive region of two window classes: the
//! performance graph window and the per-company score breakdown opened from
//! it. Statically sized widgets are listed one by one; list-like widget
//! groups reserve a contiguous [`WidgetRange`] whose extent comes from a
//! domain bound (score category count, company limit), so nothing is
//! numbered by hand and the blocks cannot drift apart.
//!
//! # Example
//!
//! ```ignore
//! use economy::ScoreCategory;
//! use graph_ui::{performance_detail, PerformanceDetailWidget};
//!
//! let id = performance_detail::score_widget(ScoreCategory::Delivered);
//! assert_eq!(
//!     PerformanceDetailWidget::from_id(id),
//!     Some(PerformanceDetailWidget::Score(ScoreCategory::Delivered)),
//! );
//! ```

pub mod graph_window;
pub mod namespace;
pub mod performance_detail;
pub mod widget;

// Re-export main types
pub use graph_window::GraphWidget;
pub use namespace::{NamespaceError, WindowNamespace};
pub use performance_detail::PerformanceDetailWidget;
pub use widget::{WidgetId, WidgetRange};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
