use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::data::resolve::{render_pie_chart, render_scatter_chart, PieChart, ScatterChart};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset; replaced wholesale on File → Open, never edited.
    pub dataset: LaunchDataset,

    /// Current dropdown selection.
    pub site: SiteSelection,

    /// Current payload slider positions.
    pub payload_range: PayloadRange,

    /// Latest resolver outputs, recomputed whenever an input changes.
    pub pie: PieChart,
    pub scatter: ScatterChart,

    /// Colours for booster categories.
    pub color_map: ColorMap,

    /// Text typed into the dropdown's search box.
    pub site_search: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig, dataset: LaunchDataset) -> Self {
        let site = SiteSelection::AllSites;
        let payload_range = initial_range(&config, &dataset);
        let pie = render_pie_chart(&dataset, &site);
        let scatter = render_scatter_chart(&dataset, &site, payload_range);
        let color_map = ColorMap::new(dataset.booster_categories());

        Self {
            config,
            dataset,
            site,
            payload_range,
            pie,
            scatter,
            color_map,
            site_search: String::new(),
            status_message: None,
        }
    }

    /// Swap in a freshly loaded dataset and reset selections.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.site = SiteSelection::AllSites;
        self.payload_range = initial_range(&self.config, &dataset);
        self.color_map = ColorMap::new(dataset.booster_categories());
        self.dataset = dataset;
        self.site_search.clear();
        self.status_message = None;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Dropdown changed: both charts depend on it.
    pub fn select_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        self.site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Slider moved: only the scatter chart depends on it.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        self.payload_range = range;
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        self.pie = render_pie_chart(&self.dataset, &self.site);
        log::debug!("pie [{}]: {:?}", self.site, self.pie.counts);
    }

    fn refresh_scatter(&mut self) {
        self.scatter = render_scatter_chart(&self.dataset, &self.site, self.payload_range);
        log::debug!(
            "scatter [{}] {}..={} kg: {} points",
            self.site,
            self.payload_range.low(),
            self.payload_range.high(),
            self.scatter.points.len()
        );
    }
}

/// The slider starts at the dataset's payload extent, falling back to the
/// configured slider bounds when there is no data.
fn initial_range(config: &DashboardConfig, dataset: &LaunchDataset) -> PayloadRange {
    match dataset.payload_bounds() {
        Some((lo, hi)) => PayloadRange::new(lo, hi),
        None => PayloadRange::new(config.payload_min, config.payload_max),
    }
}
