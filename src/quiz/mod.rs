pub mod definition;
pub mod hint;
pub mod matcher;
pub mod view;

pub use definition::*;
pub use hint::{HintInfo, next_hint};
pub use matcher::{
    IdentityKey, NodeResolution, SubmissionError, SubmissionErrorKind, SubmissionReport,
    score_submission,
};
pub use view::{QuizSummary, QuizView, sort_summaries};
