mod category;
mod option;
mod question;

pub use category::Category;
pub use option::{AnswerOption, OptionSet};
pub use question::Question;
