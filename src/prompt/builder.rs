// src/prompt/builder.rs

use crate::persona::CoachPersona;
use crate::prompt::ResponseMode;

/// Builds the complete system prompt: persona voice, profile grounding, and
/// the formatting contract for the requested reply mode.
///
/// Pure string composition. In structured mode the persona's header opens the
/// prompt and its signature closes it, so the model sees both framing lines
/// exactly as they must appear in the reply.
pub fn build_system_prompt(theme: &str, persona: CoachPersona, mode: ResponseMode) -> String {
    let mut prompt = String::new();

    if mode == ResponseMode::Structured {
        prompt.push_str(persona.header());
        prompt.push_str("\n\n");
    }

    // 1. Persona voice
    prompt.push_str(persona.tone());
    prompt.push_str("\n\n");

    // 2. Ground every answer in the profile theme
    prompt.push_str("Ground every answer in the client's profile theme:\n");
    prompt.push_str(&format!("\"{theme}\"\n\n"));

    // 3. Personalize
    prompt.push_str("Use the client's name from the profile to make the reply personal.\n\n");

    match mode {
        ResponseMode::Structured => {
            prompt.push_str("Your reply must follow this exact structure, in order:\n");
            prompt.push_str(
                "1. First line: the opening line shown at the top of these instructions, verbatim.\n",
            );
            prompt.push_str(
                "2. 3 to 5 bullet points of concise, practical guidance, phrased in your coaching voice.\n",
            );
            prompt.push_str(
                "3. Exactly one line beginning with \"15-minute nudge:\" followed by one actionable sentence the client can do in the next 15 minutes.\n",
            );
            prompt.push_str(
                "4. Last line: the sign-off shown at the bottom of these instructions, verbatim.\n",
            );
            prompt.push_str("\n");
            prompt.push_str(persona.signature());
            prompt.push('\n');
        }
        ResponseMode::Free => {
            prompt.push_str(
                "This is a follow-up turn. Reply with a single flowing paragraph of prose in your coaching voice. Write it as continuous text, conversational and direct.\n",
            );
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PERSONAS: [CoachPersona; 6] = [
        CoachPersona::Nia,
        CoachPersona::Raya,
        CoachPersona::Vera,
        CoachPersona::Lyra,
        CoachPersona::Athena,
        CoachPersona::Kora,
    ];

    fn first_non_empty_line(text: &str) -> &str {
        text.lines().find(|l| !l.trim().is_empty()).unwrap()
    }

    fn last_non_empty_line(text: &str) -> &str {
        text.lines().rev().find(|l| !l.trim().is_empty()).unwrap()
    }

    #[test]
    fn structured_prompt_is_framed_by_header_and_signature() {
        for persona in ALL_PERSONAS {
            let prompt = build_system_prompt("Decisive clarity", persona, ResponseMode::Structured);
            assert_eq!(first_non_empty_line(&prompt), persona.header());
            assert_eq!(last_non_empty_line(&prompt), persona.signature());
        }
    }

    #[test]
    fn structured_prompt_carries_format_rules() {
        let prompt =
            build_system_prompt("Decisive clarity", CoachPersona::Kora, ResponseMode::Structured);
        assert!(prompt.contains("3 to 5 bullet points"));
        assert!(prompt.contains("15-minute nudge:"));
        assert!(prompt.contains("verbatim"));
    }

    #[test]
    fn unknown_persona_id_composes_with_default_framing() {
        let persona = CoachPersona::lookup(Some("not-a-coach"));
        let prompt = build_system_prompt("Decisive clarity", persona, ResponseMode::Structured);
        assert_eq!(first_non_empty_line(&prompt), CoachPersona::Vera.header());
        assert_eq!(last_non_empty_line(&prompt), CoachPersona::Vera.signature());
    }

    #[test]
    fn theme_is_quoted_verbatim() {
        let prompt = build_system_prompt(
            "Quiet persistence, loud results",
            CoachPersona::Lyra,
            ResponseMode::Free,
        );
        assert!(prompt.contains("\"Quiet persistence, loud results\""));
    }

    #[test]
    fn free_prompt_requests_no_structure() {
        for persona in ALL_PERSONAS {
            let prompt = build_system_prompt("Decisive clarity", persona, ResponseMode::Free);
            assert!(!prompt.contains("bullet"));
            assert!(!prompt.contains("15-minute nudge:"));
            assert!(!prompt.contains(persona.header()));
            assert!(!prompt.contains(persona.signature()));
            assert!(prompt.contains("single flowing paragraph"));
        }
    }

    #[test]
    fn prompt_is_deterministic() {
        let a = build_system_prompt("Decisive clarity", CoachPersona::Nia, ResponseMode::Structured);
        let b = build_system_prompt("Decisive clarity", CoachPersona::Nia, ResponseMode::Structured);
        assert_eq!(a, b);
    }
}
