mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use quiz_vm::{OptionButtonVm, QuestionVm, QuizIntent, QuizOutcome, QuizVm, start_quiz};
pub use results_vm::{
    BarVm, CategoryChartVm, LegendItemVm, PieSliceVm, ResultsVm, map_results, option_color,
    pie_slices,
};
