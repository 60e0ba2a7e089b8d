pub mod layout;
pub mod projection;
pub mod range;
pub mod scale;
pub mod series;
pub mod timestamp;
pub mod types;

pub use layout::{PlotInsets, PlotLayout};
pub use projection::project_plot_points;
pub use range::ValueRange;
pub use scale::PixelScale;
pub use series::parse_series_json;
pub use timestamp::{TimestampFormat, format_timestamp, parse_timestamp};
pub use types::{PlotPoint, SamplePoint, Viewport};
