// src/persona/mod.rs
// Coach persona catalog. Six fixed personalities selectable from the app's
// style picker; unknown or missing ids fall back to Vera.

pub mod athena;
pub mod kora;
pub mod lyra;
pub mod nia;
pub mod raya;
pub mod vera;

/// The six coaching personalities. Each one carries a voice description for
/// the system prompt plus the verbatim header and signature lines that frame
/// a structured reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoachPersona {
    Nia,    // Motivational
    Raya,   // Supportive
    Vera,   // Collaborative (default)
    Lyra,   // Strategic
    Athena, // Transformational
    Kora,   // Directive
}

impl CoachPersona {
    /// Resolve a caller-supplied persona id. An unknown or absent id is not
    /// an error; it maps to the default persona.
    pub fn lookup(id: Option<&str>) -> Self {
        id.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// Voice description injected at the top of the system prompt.
    pub fn tone(&self) -> &'static str {
        match self {
            CoachPersona::Nia => nia::NIA_TONE,
            CoachPersona::Raya => raya::RAYA_TONE,
            CoachPersona::Vera => vera::VERA_TONE,
            CoachPersona::Lyra => lyra::LYRA_TONE,
            CoachPersona::Athena => athena::ATHENA_TONE,
            CoachPersona::Kora => kora::KORA_TONE,
        }
    }

    /// First line of a structured reply, verbatim.
    pub fn header(&self) -> &'static str {
        match self {
            CoachPersona::Nia => nia::NIA_HEADER,
            CoachPersona::Raya => raya::RAYA_HEADER,
            CoachPersona::Vera => vera::VERA_HEADER,
            CoachPersona::Lyra => lyra::LYRA_HEADER,
            CoachPersona::Athena => athena::ATHENA_HEADER,
            CoachPersona::Kora => kora::KORA_HEADER,
        }
    }

    /// Last line of a structured reply, verbatim.
    pub fn signature(&self) -> &'static str {
        match self {
            CoachPersona::Nia => nia::NIA_SIGNATURE,
            CoachPersona::Raya => raya::RAYA_SIGNATURE,
            CoachPersona::Vera => vera::VERA_SIGNATURE,
            CoachPersona::Lyra => lyra::LYRA_SIGNATURE,
            CoachPersona::Athena => athena::ATHENA_SIGNATURE,
            CoachPersona::Kora => kora::KORA_SIGNATURE,
        }
    }

    /// Coaching style label shown under the thumbnail in the app.
    pub fn label(&self) -> &'static str {
        match self {
            CoachPersona::Nia => "Motivational",
            CoachPersona::Raya => "Supportive",
            CoachPersona::Vera => "Collaborative",
            CoachPersona::Lyra => "Strategic",
            CoachPersona::Athena => "Transformational",
            CoachPersona::Kora => "Directive",
        }
    }
}

impl Default for CoachPersona {
    fn default() -> Self {
        CoachPersona::Vera
    }
}

impl std::fmt::Display for CoachPersona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CoachPersona::Nia => "nia",
                CoachPersona::Raya => "raya",
                CoachPersona::Vera => "vera",
                CoachPersona::Lyra => "lyra",
                CoachPersona::Athena => "athena",
                CoachPersona::Kora => "kora",
            }
        )
    }
}

impl std::str::FromStr for CoachPersona {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nia" => Ok(CoachPersona::Nia),
            "raya" => Ok(CoachPersona::Raya),
            "vera" => Ok(CoachPersona::Vera),
            "lyra" => Ok(CoachPersona::Lyra),
            "athena" => Ok(CoachPersona::Athena),
            "kora" => Ok(CoachPersona::Kora),
            _ => Err(()),
        }
    }
}
