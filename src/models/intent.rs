use serde::{Deserialize, Serialize};

/// The category a chat utterance was matched to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    ClassQuery,
    Booking,
    WeightLoss,
    MuscleBuilding,
    Nutrition,
    Workout,
    Motivation,
    InstructorInfo,
    Onboarding,
    Help,
    Thanks,
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::ClassQuery => "class_query",
            Intent::Booking => "booking",
            Intent::WeightLoss => "weight_loss",
            Intent::MuscleBuilding => "muscle_building",
            Intent::Nutrition => "nutrition",
            Intent::Workout => "workout",
            Intent::Motivation => "motivation",
            Intent::InstructorInfo => "instructor_info",
            Intent::Onboarding => "onboarding",
            Intent::Help => "help",
            Intent::Thanks => "thanks",
            Intent::Fallback => "fallback",
        }
    }
}

/// Minimal projection of a bookable class, used only to fill chat replies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassSummary {
    pub name: String,
    pub instructor: String,
}

impl ClassSummary {
    pub fn new(name: impl Into<String>, instructor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructor: instructor.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub intent: Intent,
    pub text: String,
}
