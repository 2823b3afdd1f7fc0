mod stats_vm;
mod test_vm;
mod time_fmt;

pub use stats_vm::{HistoryRowVm, TrendBarVm, map_history_rows, map_trend_bars};
pub use test_vm::{QuestionVm, ReviewRowVm, map_question, map_review_rows};
pub use time_fmt::format_date;
