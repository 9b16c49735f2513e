//! Begrenzter Verlauf der ausgeführten Commands.

use super::AppCommand;

/// Standard-Kapazität des Verlaufs.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Ausgeführte Commands in Ausführungsreihenfolge.
///
/// Ist die Kapazität erreicht, fällt die ältere Hälfte weg.
pub struct CommandLog {
    entries: Vec<AppCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    /// Leerer Verlauf mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leerer Verlauf mit eigener Kapazität (mindestens 2).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(2),
        }
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= self.capacity {
            let dropped = self.capacity / 2;
            self.entries.drain(..dropped);
            log::trace!("Command-Log gekürzt: {} Einträge verworfen", dropped);
        }
        self.entries.push(command.clone());
    }

    /// Anzahl der gespeicherten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, solange noch nichts ausgeführt wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Alle gespeicherten Commands, ältester zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_log_drops_older_half() {
        let mut log = CommandLog::with_capacity(10);
        for _ in 0..10 {
            log.record(&AppCommand::EndMarkerDrag);
        }
        log.record(&AppCommand::RequestExit);

        assert_eq!(log.len(), 6);
        assert_eq!(log.last(), Some(&AppCommand::RequestExit));
    }

    #[test]
    fn default_capacity_is_used() {
        let mut log = CommandLog::new();
        for _ in 0..DEFAULT_CAPACITY {
            log.record(&AppCommand::EndMarkerDrag);
        }
        assert_eq!(log.len(), DEFAULT_CAPACITY);
    }
}
