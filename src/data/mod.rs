/// Data layer: launch records, loading, filtering and chart resolvers.
///
/// Architecture:
/// ```text
///  spacex_launch_dash.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  SiteSelection + PayloadRange predicates
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  resolve  │  PieChart / ScatterChart for the plots
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod resolve;
