//! Reusable Dioxus RSX components for the Mars dashboards.

mod chart_container;
mod chart_header;
mod error_display;
mod gas_detail_panel;
mod gas_list;
mod loading_spinner;
mod sol_navigator;
mod sol_summary_card;
mod threshold_slider;
mod view_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use gas_detail_panel::GasDetailPanel;
pub use gas_list::GasList;
pub use loading_spinner::LoadingSpinner;
pub use sol_navigator::SolNavigator;
pub use sol_summary_card::SolSummaryCard;
pub use threshold_slider::ThresholdSlider;
pub use view_selector::ViewSelector;
