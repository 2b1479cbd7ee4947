mod context;
mod diff;
mod list_metrics;
mod snapshot;

pub use context::{ProjectContext, color_choice_to_mode, load_config, write_output};
pub use diff::{render_diff, run_diff, run_diff_impl};
pub use list_metrics::{format_metric_list, run_list_metrics};
pub use snapshot::{build_revision, content_key, run_snapshot, run_snapshot_impl};
