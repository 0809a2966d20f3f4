/// Presentation layer: sidebar widgets, metric value boxes, scatter plot,
/// and the data grid. Everything here consumes the filtered view and the
/// derived metrics; nothing here owns data-layer state.

pub mod grid;
pub mod panels;
pub mod plot;
