use crate::models::ScriptedReply;

pub const DEFAULT_GREETING: &str = "Hello! I'm RestStop's virtual assistant. I can help you find clean restrooms nearby, give you directions, or answer questions about amenities. How can I help you today?";

pub const DEFAULT_FALLBACK: &str = "I understand you're looking for a restroom. I can help you find clean restrooms nearby. Would you like me to show you the closest options?";

const FOUND_NEARBY: &str = "I found several restrooms near you. The closest is Central Park Public Restroom (0.3 miles away) with a cleanliness score of 4.2/5. Would you like directions?";
const WELCOME: &str = "You're welcome! Happy to help. Safe travels!";

/// Pick the reply for the first trigger found in `utterance`
///
/// Triggers are tested in slice order and compared case-insensitively, so an
/// utterance containing two triggers gets the reply of whichever is declared
/// first. Falls back to `fallback` when nothing matches.
pub fn respond<'a>(utterance: &str, table: &'a [ScriptedReply], fallback: &'a str) -> &'a str {
    let lowered = utterance.to_lowercase();

    table
        .iter()
        .find(|entry| lowered.contains(&entry.trigger.to_lowercase()))
        .map(|entry| entry.reply.as_str())
        .unwrap_or(fallback)
}

/// Reply table shipped with the assistant, in precedence order
pub fn default_replies() -> Vec<ScriptedReply> {
    vec![
        ScriptedReply::new("hello", "Hello! How can I help you find a restroom today?"),
        ScriptedReply::new("hi", "Hi there! Need help finding a clean restroom?"),
        ScriptedReply::new("find", FOUND_NEARBY),
        ScriptedReply::new("nearby", FOUND_NEARBY),
        ScriptedReply::new(
            "clean",
            "The cleanest restroom near you is Bryant Park Public Restroom with a cleanliness score of 4.8/5, located 0.5 miles from your current location.",
        ),
        ScriptedReply::new(
            "help",
            "I can help you find restrooms, give directions, check if a restroom has specific amenities, or report a restroom's condition. What do you need?",
        ),
        ScriptedReply::new(
            "amenities",
            "Most restrooms in our database include information about toilet paper, soap, hand dryers, and accessibility. Is there a specific amenity you're looking for?",
        ),
        ScriptedReply::new(
            "accessible",
            "I found 3 wheelchair accessible restrooms near you. The closest is Grand Central Terminal (0.4 miles away).",
        ),
        ScriptedReply::new(
            "baby",
            "I found 2 restrooms with baby changing tables near you. The closest is Starbucks on 5th Avenue (0.2 miles away).",
        ),
        ScriptedReply::new(
            "direction",
            "I've sent directions to Central Park Public Restroom to the map. It's approximately 5 minutes away by walking.",
        ),
        ScriptedReply::new("thanks", WELCOME),
        ScriptedReply::new("thank", WELCOME),
    ]
}

/// Chat assistant: an ordered reply table plus the fallback and greeting
#[derive(Debug, Clone)]
pub struct Responder {
    table: Vec<ScriptedReply>,
    fallback: String,
    greeting: String,
}

impl Responder {
    pub fn new(table: Vec<ScriptedReply>, fallback: impl Into<String>, greeting: impl Into<String>) -> Self {
        let table = table
            .into_iter()
            .filter(|entry| {
                // An empty trigger is a substring of everything
                if entry.trigger.is_empty() {
                    tracing::warn!("Dropping chat reply with empty trigger: {:?}", entry.reply);
                    return false;
                }
                true
            })
            .collect();

        Self {
            table,
            fallback: fallback.into(),
            greeting: greeting.into(),
        }
    }

    pub fn respond(&self, utterance: &str) -> &str {
        respond(utterance, &self.table, &self.fallback)
    }

    /// First message shown when a conversation starts or is cleared
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn table(&self) -> &[ScriptedReply] {
        &self.table
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(default_replies(), DEFAULT_FALLBACK, DEFAULT_GREETING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_reply() {
        let responder = Responder::default();

        assert_eq!(
            responder.respond("hello there"),
            "Hello! How can I help you find a restroom today?"
        );
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let responder = Responder::default();

        assert_eq!(responder.respond("where is the toilet?"), DEFAULT_FALLBACK);
        assert_eq!(responder.respond(""), DEFAULT_FALLBACK);
    }

    #[test]
    fn test_declared_order_wins() {
        let table = vec![
            ScriptedReply::new("baby", "changing tables"),
            ScriptedReply::new("clean", "cleanest"),
        ];

        assert_eq!(respond("a clean spot for my baby", &table, "none"), "changing tables");

        let reversed: Vec<ScriptedReply> = table.into_iter().rev().collect();
        assert_eq!(respond("a clean spot for my baby", &reversed, "none"), "cleanest");
    }

    #[test]
    fn test_case_insensitive() {
        let table = vec![ScriptedReply::new("Help", "helping")];

        assert_eq!(respond("HELP ME", &table, "none"), "helping");
    }

    #[test]
    fn test_empty_trigger_dropped() {
        let responder = Responder::new(
            vec![ScriptedReply::new("", "always"), ScriptedReply::new("map", "the map")],
            "fallback",
            "greeting",
        );

        assert_eq!(responder.table().len(), 1);
        assert_eq!(responder.respond("nothing here"), "fallback");
    }

    #[test]
    fn test_substring_trigger_quirk() {
        // Triggers match inside words: "this" contains "hi"
        let responder = Responder::default();

        assert_eq!(
            responder.respond("this one"),
            "Hi there! Need help finding a clean restroom?"
        );
    }
}
