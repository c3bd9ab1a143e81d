use crate::event::Event;

/// Decides whether a candidate event double-books a slot already held by
/// `existing` on the same day.
pub trait ConflictPolicy {
    fn conflicts(&self, existing: &Event, candidate: &Event) -> bool;
}

/// Two events conflict iff their time tokens are identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactTimeConflict;

impl ConflictPolicy for ExactTimeConflict {
    fn conflicts(&self, existing: &Event, candidate: &Event) -> bool {
        existing.time() == candidate.time()
    }
}

impl<F> ConflictPolicy for F
where
    F: Fn(&Event, &Event) -> bool,
{
    fn conflicts(&self, existing: &Event, candidate: &Event) -> bool {
        self(existing, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_time_only_matches_identical_tokens() {
        let policy = ExactTimeConflict;
        let a = Event::new("A", "09:00");
        assert!(policy.conflicts(&a, &Event::new("B", "09:00")));
        assert!(!policy.conflicts(&a, &Event::new("B", "09:01")));
        assert!(!policy.conflicts(&a, &Event::new("B", "9:00")));
    }

    #[test]
    fn closures_act_as_policies() {
        let same_hour = |a: &Event, b: &Event| a.time().get(..2) == b.time().get(..2);
        let a = Event::new("A", "09:00");
        assert!(same_hour.conflicts(&a, &Event::new("B", "09:45")));
        assert!(!same_hour.conflicts(&a, &Event::new("B", "10:00")));
    }
}
