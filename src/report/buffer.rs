use thiserror::Error;

/// One rendered line of history, produced by a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRecord {
    pub round: usize,
    pub text: String,
    pub graph: Option<String>,
}

impl RenderedRecord {
    pub fn new(round: usize, text: String, graph: Option<String>) -> Self {
        Self { round, text, graph }
    }

    /// Text followed by the graph, if any.
    pub fn line(&self) -> String {
        match &self.graph {
            Some(graph) => format!("{}{}", self.text, graph),
            None => self.text.clone(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("round {round} is outside a buffer of {capacity} rounds")]
    OutOfRange { round: usize, capacity: usize },
    #[error("round {0} was already recorded")]
    AlreadyWritten(usize),
}

/// Fixed-size, write-once store with one slot per round.
///
/// Slots are allocated up front and never move, so slot `i` only ever holds
/// what round `i` produced. A round whose metric failed leaves its slot
/// empty.
#[derive(Debug)]
pub struct RoundBuffer<T> {
    slots: Vec<Option<T>>,
}

impl<T> RoundBuffer<T> {
    pub fn new(rounds: usize) -> Self {
        let mut slots = Vec::with_capacity(rounds);
        slots.resize_with(rounds, || None);
        Self { slots }
    }

    /// Number of rounds the buffer was sized for.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of rounds that actually produced a value.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn record(&mut self, round: usize, value: T) -> Result<&T, SlotError> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(round)
            .ok_or(SlotError::OutOfRange { round, capacity })?;
        if slot.is_some() {
            return Err(SlotError::AlreadyWritten(round));
        }
        Ok(slot.insert(value))
    }

    pub fn get(&self, round: usize) -> Option<&T> {
        self.slots.get(round).and_then(Option::as_ref)
    }

    /// Most recent value recorded strictly before `round`.
    pub fn latest_before(&self, round: usize) -> Option<&T> {
        let end = round.min(self.slots.len());
        self.slots[..end].iter().rev().find_map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presized_and_empty() {
        let buf: RoundBuffer<u32> = RoundBuffer::new(4);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.filled(), 0);
        assert!(buf.get(0).is_none());
    }

    #[test]
    fn write_once_per_round() {
        let mut buf = RoundBuffer::new(2);
        assert_eq!(buf.record(0, 7), Ok(&7));
        assert_eq!(buf.record(0, 8), Err(SlotError::AlreadyWritten(0)));
        assert_eq!(buf.get(0), Some(&7));
    }

    #[test]
    fn out_of_range_round_rejected() {
        let mut buf = RoundBuffer::new(2);
        assert_eq!(
            buf.record(2, 1),
            Err(SlotError::OutOfRange {
                round: 2,
                capacity: 2
            })
        );
    }

    #[test]
    fn latest_before_skips_failed_rounds() {
        let mut buf = RoundBuffer::new(4);
        buf.record(0, "a").unwrap();
        buf.record(2, "c").unwrap();
        assert_eq!(buf.latest_before(0), None);
        assert_eq!(buf.latest_before(1), Some(&"a"));
        // round 1 failed, so round 2 and 3 fall back to the newest survivor
        assert_eq!(buf.latest_before(2), Some(&"a"));
        assert_eq!(buf.latest_before(3), Some(&"c"));
        assert_eq!(buf.latest_before(99), Some(&"c"));
    }

    #[test]
    fn record_line_joins_graph() {
        let r = RenderedRecord::new(0, "text".into(), Some("\t|o".into()));
        assert_eq!(r.line(), "text\t|o");
        let r = RenderedRecord::new(1, "plain".into(), None);
        assert_eq!(r.line(), "plain");
    }
}
