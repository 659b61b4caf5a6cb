use std::time::Duration;

/// How long each note stays on screen.
pub const NOTE_INTERVAL: Duration = Duration::from_secs(5);

pub const BEHAVIOUR_NOTES: [&str; 6] = [
    "Animals are most active at dawn and dusk.",
    "Weather conditions significantly impact animal movement.",
    "Animals are active feeding on new spring growth right now.",
    "Tahr have been sighted feeding around 900m elevation.",
    "Stags are feeding in open country within bachelor groups.",
    "Hinds are preferring dense vegetation as they birth and raise their fawns.",
];

/// Cycles through a fixed list of notes, one per tick.
#[derive(Debug, Clone)]
pub struct NoteRotator {
    notes: &'static [&'static str],
    index: usize,
}

impl NoteRotator {
    pub const fn new(notes: &'static [&'static str]) -> Self {
        Self { notes, index: 0 }
    }

    pub const fn behaviour() -> Self {
        Self::new(&BEHAVIOUR_NOTES)
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the note to show now and moves on to the next one, wrapping.
    pub fn tick(&mut self) -> Option<&'static str> {
        let note = self.notes.get(self.index).copied()?;
        self.index = (self.index + 1) % self.notes.len();
        Some(note)
    }
}

impl Default for NoteRotator {
    fn default() -> Self {
        Self::behaviour()
    }
}
