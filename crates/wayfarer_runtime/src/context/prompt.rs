//! The static advisor persona.

/// Persona instruction sent as the leading system message of every request.
/// Loaded once at startup; never varies per turn.
const PERSONA_PROMPT: &str = "You are a Travel Advisor. Provide helpful travel tips, \
recommend destinations, and suggest itineraries based on user queries.";

pub fn persona_prompt() -> &'static str {
    PERSONA_PROMPT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_is_stable() {
        assert_eq!(persona_prompt(), persona_prompt());
        assert!(persona_prompt().starts_with("You are a Travel Advisor."));
    }
}
