pub mod persona;
pub mod provider;
pub mod question;
pub mod question_set;

pub use persona::{Difficulty, Persona};
pub use provider::Provider;
pub use question::{Question, QuestionType};
pub use question_set::QuestionSet;
