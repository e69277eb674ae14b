use serde::{Deserialize, Serialize};

/// Tone/style directive injected into the system instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Persona {
    #[serde(rename = "Friendly mentor")]
    FriendlyMentor,
    #[serde(rename = "Concise explainer")]
    ConciseExplainer,
    #[serde(rename = "Tough coach")]
    ToughCoach,
    #[serde(rename = "Enthusiastic tutor")]
    EnthusiasticTutor,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::FriendlyMentor,
        Persona::ConciseExplainer,
        Persona::ToughCoach,
        Persona::EnthusiasticTutor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::FriendlyMentor => "Friendly mentor",
            Persona::ConciseExplainer => "Concise explainer",
            Persona::ToughCoach => "Tough coach",
            Persona::EnthusiasticTutor => "Enthusiastic tutor",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
