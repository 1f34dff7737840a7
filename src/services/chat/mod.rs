//! Canned-response chat assistant for the studio widget.
//!
//! Matching is plain substring search over the lower-cased utterance against
//! an ordered rule table. The only non-determinism is which variant of a
//! multi-variant reply is returned, and that goes through [`VariantPicker`].

pub mod replies;
pub mod rules;

use rand::Rng;

use crate::models::{ChatReply, ClassSummary, Intent};

pub use rules::{IntentRule, Predicate, Producer, ResponseTable};

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("response table has no rules")]
    EmptyTable,

    #[error("rule for {0:?} has no reply variants")]
    NoVariants(Intent),
}

/// Chooses an index in `0..len` for multi-variant replies.
pub trait VariantPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

pub struct ThreadRngPicker;

impl VariantPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

pub struct ChatResponder {
    table: ResponseTable,
    picker: Box<dyn VariantPicker>,
}

impl ChatResponder {
    /// The studio rule set with a thread-local RNG picking reply variants.
    pub fn new() -> Result<Self, ChatError> {
        Self::with_picker(Box::new(ThreadRngPicker))
    }

    pub fn with_picker(picker: Box<dyn VariantPicker>) -> Result<Self, ChatError> {
        Ok(Self::with_table(ResponseTable::standard()?, picker))
    }

    pub fn with_table(table: ResponseTable, picker: Box<dyn VariantPicker>) -> Self {
        Self { table, picker }
    }

    pub fn classify(&self, utterance: &str) -> Intent {
        let lowered = utterance.to_lowercase();
        self.table
            .first_match(&lowered)
            .map(|r| r.intent)
            .unwrap_or(Intent::Fallback)
    }

    pub fn reply(&self, utterance: &str, classes: &[ClassSummary]) -> ChatReply {
        let lowered = utterance.to_lowercase();

        let reply = match self.table.first_match(&lowered) {
            Some(rule) => ChatReply {
                intent: rule.intent,
                text: rule
                    .producer
                    .produce(&lowered, classes, self.picker.as_ref()),
            },
            None => ChatReply {
                intent: Intent::Fallback,
                text: replies::fallback(utterance),
            },
        };

        tracing::debug!(
            intent = reply.intent.as_str(),
            classes = classes.len(),
            "chat reply selected"
        );

        reply
    }

    /// Never fails: unmatched text gets the fallback reply.
    pub fn respond(&self, utterance: &str, classes: &[ClassSummary]) -> String {
        self.reply(utterance, classes).text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl VariantPicker for Fixed {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    fn responder() -> ChatResponder {
        ChatResponder::with_picker(Box::new(Fixed(0))).unwrap()
    }

    fn studio_classes() -> Vec<ClassSummary> {
        vec![
            ClassSummary::new("Yoga Basics", "Sarah Johnson"),
            ClassSummary::new("HIIT", "Mike Chen"),
        ]
    }

    #[test]
    fn test_greeting_beats_nutrition() {
        let bot = responder();
        assert_eq!(bot.classify("hello, any diet tips?"), Intent::Greeting);
    }

    #[test]
    fn test_case_insensitive_greeting() {
        let bot = responder();
        for text in ["HELLO", "hello", "HeLLo"] {
            assert_eq!(bot.classify(text), Intent::Greeting, "{text}");
        }
    }

    #[test]
    fn test_class_query_lists_classes() {
        let bot = responder();
        let reply = bot.reply("what classes are available", &studio_classes());
        assert_eq!(reply.intent, Intent::ClassQuery);
        assert!(reply.text.contains("Yoga Basics with Sarah Johnson"));
        assert!(reply.text.contains("HIIT with Mike Chen"));
        assert!(reply
            .text
            .contains("Yoga Basics with Sarah Johnson, HIIT with Mike Chen"));
    }

    #[test]
    fn test_class_query_without_classes() {
        let bot = responder();
        let text = bot.respond("what classes are available", &[]);
        assert!(!text.is_empty());
        assert!(!text.contains(replies::CLASS_LIST_LEAD));
        assert!(!text.starts_with('.'));
        assert_eq!(text, replies::CLASS_LIST_TAIL);
    }

    #[test]
    fn test_fallback_echoes_user_text() {
        let bot = responder();
        let reply = bot.reply("xyzzy plugh", &[]);
        assert_eq!(reply.intent, Intent::Fallback);
        assert!(reply.text.contains("xyzzy plugh"));

        let text = bot.respond("Xyzzy PLUGH", &[]);
        assert!(text.contains("Xyzzy PLUGH"));
    }

    #[test]
    fn test_muscle_beats_workout() {
        let bot = responder();
        assert_eq!(
            bot.classify("I want to build muscle and strength"),
            Intent::MuscleBuilding
        );
        assert_eq!(
            bot.classify("strength training routine"),
            Intent::MuscleBuilding
        );
    }

    #[test]
    fn test_workout_beats_onboarding() {
        let bot = responder();
        let reply = bot.reply("beginner workout", &[]);
        assert_eq!(reply.intent, Intent::Workout);
        assert_eq!(reply.text, replies::WORKOUT_BEGINNER);
        assert_eq!(bot.classify("I'm a beginner"), Intent::Onboarding);
        assert_eq!(bot.classify("where do I start"), Intent::Onboarding);
    }

    #[test]
    fn test_random_variant_stays_in_set() {
        let bot = ChatResponder::new().unwrap();
        for _ in 0..50 {
            let text = bot.respond("hey", &[]);
            assert!(replies::GREETINGS.contains(&text.as_str()));
            let text = bot.respond("so tired", &[]);
            assert!(replies::MOTIVATION.contains(&text.as_str()));
        }
    }

    #[test]
    fn test_injected_picker_selects_variant() {
        let bot = ChatResponder::with_picker(Box::new(Fixed(2))).unwrap();
        assert_eq!(bot.respond("hey", &[]), replies::GREETINGS[2]);
        assert_eq!(bot.respond("need motivation", &[]), replies::MOTIVATION[2]);
    }

    #[test]
    fn test_single_variant_is_stable() {
        let bot = ChatResponder::new().unwrap();
        let first = bot.respond("how do I book", &[]);
        let second = bot.respond("how do I book", &[]);
        assert_eq!(first, second);
        assert_eq!(first, replies::BOOKING_HOW_TO);
    }

    #[test]
    fn test_non_empty_for_varied_input() {
        let bot = ChatResponder::new().unwrap();
        let samples = [
            "hello",
            "what classes are upcoming",
            "reservation please",
            "lose weight fast",
            "gain weight",
            "eating plan",
            "exercise",
            "motivate me",
            "instructor",
            "new here",
            "help",
            "thank you",
            "🤔",
            "???",
            "",
        ];
        for text in samples {
            assert!(!bot.respond(text, &studio_classes()).is_empty(), "{text:?}");
        }
    }

    #[test]
    fn test_multi_line_replies_keep_newlines() {
        let bot = responder();
        let text = bot.respond("help", &[]);
        assert_eq!(text, replies::HELP);
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_standard_table_passes_validation() {
        let bot = ChatResponder::new().unwrap();
        assert_eq!(bot.table.rules().len(), 12);
        for rule in bot.table.rules() {
            if let Producer::OneOf(variants) = rule.producer {
                assert!(!variants.is_empty(), "{:?}", rule.intent);
            }
        }
    }

    #[test]
    fn test_empty_utterance_falls_through() {
        let bot = responder();
        assert_eq!(bot.classify(""), Intent::Fallback);
    }
}
