use crate::models::{ClassSummary, Intent};

use super::replies;
use super::{ChatError, VariantPicker};

/// How many open classes a reply will name.
pub const MAX_LISTED_CLASSES: usize = 3;

/// A test over the lower-cased utterance.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// At least one keyword is a substring of the utterance.
    Any(&'static [&'static str]),
    /// Every inner predicate holds.
    All(&'static [Predicate]),
}

impl Predicate {
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Predicate::Any(keywords) => keywords.iter().any(|k| lowered.contains(k)),
            Predicate::All(parts) => parts.iter().all(|p| p.matches(lowered)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Producer {
    Fixed(&'static str),
    /// Uniformly random choice among the variants.
    OneOf(&'static [&'static str]),
    /// Optional "lead + class list." clause followed by a fixed tail.
    WithClasses {
        lead: &'static str,
        tail: &'static str,
    },
    /// First refinement whose keyword appears wins, otherwise the default.
    Refined {
        refinements: &'static [(&'static str, &'static str)],
        otherwise: &'static str,
    },
}

impl Producer {
    pub fn produce(
        &self,
        lowered: &str,
        classes: &[ClassSummary],
        picker: &dyn VariantPicker,
    ) -> String {
        match self {
            Producer::Fixed(text) => (*text).to_string(),
            Producer::OneOf(variants) => {
                let idx = picker.pick(variants.len());
                variants
                    .get(idx)
                    .or_else(|| variants.first())
                    .map(|s| (*s).to_string())
                    .unwrap_or_default()
            }
            Producer::WithClasses { lead, tail } => match class_clause(classes) {
                Some(list) => format!("{lead}{list}. {tail}"),
                None => (*tail).to_string(),
            },
            Producer::Refined {
                refinements,
                otherwise,
            } => refinements
                .iter()
                .find(|(keyword, _)| lowered.contains(keyword))
                .map(|(_, text)| *text)
                .unwrap_or(*otherwise)
                .to_string(),
        }
    }
}

/// `"<name> with <instructor>"` for the first few classes, comma separated.
pub fn class_clause(classes: &[ClassSummary]) -> Option<String> {
    if classes.is_empty() {
        return None;
    }
    Some(
        classes
            .iter()
            .take(MAX_LISTED_CLASSES)
            .map(|c| format!("{} with {}", c.name, c.instructor))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub predicate: Predicate,
    pub producer: Producer,
}

/// Ordered rules; the first matching rule wins.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    rules: Vec<IntentRule>,
}

const GREETING: Predicate = Predicate::Any(&["hi", "hello", "hey"]);
const CLASS_QUERY: Predicate = Predicate::All(&[
    Predicate::Any(&["class"]),
    Predicate::Any(&["what", "available", "upcoming"]),
]);
const BOOKING: Predicate = Predicate::Any(&["book", "reservation"]);
const WEIGHT_LOSS: Predicate = Predicate::Any(&["weight loss", "lose weight", "fat loss"]);
const MUSCLE: Predicate = Predicate::Any(&["muscle", "bulk", "gain weight", "strength"]);
const NUTRITION: Predicate = Predicate::Any(&["nutrition", "diet", "food", "eating"]);
const WORKOUT: Predicate = Predicate::Any(&["workout", "exercise", "training"]);
const MOTIVATION: Predicate = Predicate::Any(&["motivat", "lazy", "tired"]);
const INSTRUCTOR: Predicate = Predicate::Any(&["instructor", "teacher"]);
const ONBOARDING: Predicate = Predicate::Any(&["beginner", "start", "new"]);
const HELP: Predicate = Predicate::Any(&["help"]);
const THANKS: Predicate = Predicate::Any(&["thank"]);

impl ResponseTable {
    pub fn new(rules: Vec<IntentRule>) -> Result<Self, ChatError> {
        if rules.is_empty() {
            return Err(ChatError::EmptyTable);
        }
        for rule in &rules {
            if let Producer::OneOf(variants) = rule.producer {
                if variants.is_empty() {
                    return Err(ChatError::NoVariants(rule.intent));
                }
            }
        }
        Ok(Self { rules })
    }

    /// The studio's rule set. Workout precedes onboarding, so "beginner
    /// workout" gets the workout advice and not the beginner roadmap.
    pub fn standard() -> Result<Self, ChatError> {
        let rule = |intent, predicate, producer| IntentRule {
            intent,
            predicate,
            producer,
        };

        Self::new(vec![
            rule(Intent::Greeting, GREETING, Producer::OneOf(replies::GREETINGS)),
            rule(
                Intent::ClassQuery,
                CLASS_QUERY,
                Producer::WithClasses {
                    lead: replies::CLASS_LIST_LEAD,
                    tail: replies::CLASS_LIST_TAIL,
                },
            ),
            rule(Intent::Booking, BOOKING, Producer::Fixed(replies::BOOKING_HOW_TO)),
            rule(Intent::WeightLoss, WEIGHT_LOSS, Producer::Fixed(replies::WEIGHT_LOSS)),
            rule(
                Intent::MuscleBuilding,
                MUSCLE,
                Producer::Fixed(replies::MUSCLE_BUILDING),
            ),
            rule(Intent::Nutrition, NUTRITION, Producer::Fixed(replies::NUTRITION)),
            rule(
                Intent::Workout,
                WORKOUT,
                Producer::Refined {
                    refinements: &[
                        ("beginner", replies::WORKOUT_BEGINNER),
                        ("advanced", replies::WORKOUT_ADVANCED),
                    ],
                    otherwise: replies::WORKOUT_GENERAL,
                },
            ),
            rule(Intent::Motivation, MOTIVATION, Producer::OneOf(replies::MOTIVATION)),
            rule(
                Intent::InstructorInfo,
                INSTRUCTOR,
                Producer::Fixed(replies::INSTRUCTORS),
            ),
            rule(Intent::Onboarding, ONBOARDING, Producer::Fixed(replies::ONBOARDING)),
            rule(Intent::Help, HELP, Producer::Fixed(replies::HELP)),
            rule(Intent::Thanks, THANKS, Producer::Fixed(replies::THANKS)),
        ])
    }

    pub fn first_match(&self, lowered: &str) -> Option<&IntentRule> {
        self.rules.iter().find(|r| r.predicate.matches(lowered))
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }
}
