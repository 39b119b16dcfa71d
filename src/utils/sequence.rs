use std::cell::Cell;

/// Números de secuencia por fetch lógico para descartar respuestas fuera
/// de orden: solo se aplica la respuesta cuyo número sigue siendo el último
/// emitido. Gana la última petición emitida, no la última en resolver.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitir un nuevo número de secuencia (invalida los anteriores)
    pub fn begin(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.latest.get() == seq
    }

    /// Invalidar lo pendiente sin emitir una petición nueva (logout)
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_sequence_is_current() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn invalidate_discards_pending_without_new_request() {
        let sequence = RequestSequence::new();
        let seq = sequence.begin();
        sequence.invalidate();
        assert!(!sequence.is_current(seq));
    }

    #[test]
    fn stale_completion_is_rejected_after_reissue() {
        let sequence = RequestSequence::new();
        let stale = sequence.begin();
        let fresh = sequence.begin();
        // La respuesta vieja llega después de la nueva petición
        assert!(!sequence.is_current(stale));
        // La respuesta de la última petición sí se aplica
        assert!(sequence.is_current(fresh));
    }
}
