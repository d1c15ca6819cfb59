//! Offline sample characters

use rand::seq::SliceRandom;
use storychar_core::CharacterRecord;

/// A sample entry. Static data only; [`pick_sample`] materializes records.
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
}

/// Fixed sample set used when the remote API is unreachable or offline
/// mode is forced. Read-only for the life of the process.
pub const SAMPLE_CHARACTERS: &[Sample] = &[
    Sample {
        name: "Spirit-Pike Warrior",
        description: "A mythic hero merging human intellect and fish spirit strength.",
    },
    Sample {
        name: "Iron Owl Shaman",
        description: "A hybrid of nocturnal wisdom and metallic resilience.",
    },
    Sample {
        name: "Cloud Elk Guardian",
        description: "A sky-traveling protector blending natural grace with stormy energy.",
    },
    Sample {
        name: "Lynx Oracle",
        description: "A seer whose hybrid essence merges feline stealth and human intuition.",
    },
];

/// Pick one sample uniformly at random.
pub fn pick_sample() -> CharacterRecord {
    let mut rng = rand::thread_rng();
    let sample = SAMPLE_CHARACTERS
        .choose(&mut rng)
        .unwrap_or(&SAMPLE_CHARACTERS[0]);
    CharacterRecord::new(sample.name, sample.description)
}
