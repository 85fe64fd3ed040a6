use common::subject_observer::{SharedObserver, Subject};

use crate::{
    property::{ObservableProperty, SyncObservableProperty, SyncSharedObserver},
    ObservableResult,
};

pub const TEST_CHAMBER_NUMBER_NAME: &str = "testChamberNumber";

/// The observed subject: a test chamber counter whose observers hear about
/// every change of `testChamberNumber`.
pub struct TestChambers {
    test_chamber_number: ObservableProperty<i64>,
}

impl Default for TestChambers {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Subject<i64> for TestChambers {
    fn register_observer(&mut self, observer: SharedObserver<i64>) {
        self.test_chamber_number.register_observer(observer);
    }

    fn unregister_observer(&mut self, observer: SharedObserver<i64>) {
        self.test_chamber_number.unregister_observer(observer);
    }
}

impl TestChambers {
    pub fn new(test_chamber_number: i64) -> Self {
        TestChambers {
            test_chamber_number: ObservableProperty::named(
                TEST_CHAMBER_NUMBER_NAME,
                test_chamber_number,
            ),
        }
    }

    pub fn test_chamber_number(&self) -> i64 {
        *self.test_chamber_number.get()
    }

    pub fn set_test_chamber_number(&mut self, value: i64) {
        self.test_chamber_number.set(value);
    }

    pub fn next_test_chamber(&mut self) {
        self.test_chamber_number.update(|number| number + 1);
    }

    pub fn observer_count(&self) -> usize {
        self.test_chamber_number.observer_count()
    }
}

/// [`TestChambers`] that can be shared between threads.
pub struct SyncTestChambers {
    test_chamber_number: SyncObservableProperty<i64>,
}

impl Default for SyncTestChambers {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SyncTestChambers {
    pub fn new(test_chamber_number: i64) -> Self {
        SyncTestChambers {
            test_chamber_number: SyncObservableProperty::named(
                TEST_CHAMBER_NUMBER_NAME,
                test_chamber_number,
            ),
        }
    }

    pub fn register_observer(&self, observer: SyncSharedObserver<i64>) -> ObservableResult<()> {
        self.test_chamber_number.register_observer(observer)
    }

    pub fn unregister_observer(&self, observer: &SyncSharedObserver<i64>) -> ObservableResult<()> {
        self.test_chamber_number.unregister_observer(observer)
    }

    pub fn test_chamber_number(&self) -> ObservableResult<i64> {
        self.test_chamber_number.get()
    }

    pub fn set_test_chamber_number(&self, value: i64) -> ObservableResult<()> {
        self.test_chamber_number.set(value)
    }

    pub fn next_test_chamber(&self) -> ObservableResult<i64> {
        self.test_chamber_number.update(|number| number + 1)
    }
}

#[cfg(test)]
mod tests {
    use std::{rc::Rc, sync::Arc, thread};

    use common::subject_observer::{ChangePhase, Subject};
    use common_test::{get_seeded_rng, CallJournal, Notification};
    use rand::Rng;

    use crate::observers::{CheeringObserver, LoggingObserver};

    use super::{SyncTestChambers, TestChambers, TEST_CHAMBER_NUMBER_NAME};

    fn notification(observer: usize, phase: ChangePhase, value: i64) -> Notification<i64> {
        Notification {
            observer,
            phase,
            property_name: TEST_CHAMBER_NUMBER_NAME.to_string(),
            value: Some(value),
        }
    }

    #[test]
    fn test_test_chambers_default_starts_at_zero() {
        assert_eq!(0, TestChambers::default().test_chamber_number());
        assert_eq!(0, TestChambers::default().observer_count());
    }

    #[test]
    fn test_test_chambers_set_notifies_both_phases() {
        // Given
        let journal = CallJournal::new();
        let mut chambers = TestChambers::default();
        chambers.register_observer(Rc::new(journal.observer(0)));
        chambers.register_observer(Rc::new(journal.observer(1)));

        // When
        chambers.set_test_chamber_number(1);

        // Then
        assert_eq!(1, chambers.test_chamber_number());
        assert_eq!(
            vec![
                notification(0, ChangePhase::WillChange, 1),
                notification(1, ChangePhase::WillChange, 1),
                notification(0, ChangePhase::DidChange, 0),
                notification(1, ChangePhase::DidChange, 0),
            ],
            journal.notifications()
        );
    }

    #[test]
    fn test_test_chambers_successive_assignments() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let journal = CallJournal::new();
        let mut chambers = TestChambers::default();
        chambers.register_observer(Rc::new(journal.observer(0)));
        let assignments = (0..rng.gen_range(1..20))
            .map(|_| rng.gen_range(-1000..1000))
            .collect::<Vec<i64>>();

        // When
        for &value in &assignments {
            chambers.set_test_chamber_number(value);
        }

        // Then
        let expected = assignments
            .iter()
            .scan(0, |previous, &value| {
                let pair = [
                    notification(0, ChangePhase::WillChange, value),
                    notification(0, ChangePhase::DidChange, *previous),
                ];
                *previous = value;
                Some(pair)
            })
            .flatten()
            .collect::<Vec<_>>();
        assert_eq!(expected, journal.notifications());
        assert_eq!(assignments.last().copied(), Some(chambers.test_chamber_number()));
    }

    #[test]
    fn test_test_chambers_next_test_chamber() {
        // Given
        let mut chambers = TestChambers::new(9);
        chambers.register_observer(Rc::new(LoggingObserver));
        chambers.register_observer(Rc::new(CheeringObserver));

        // When
        chambers.next_test_chamber();

        // Then
        assert_eq!(10, chambers.test_chamber_number());
    }

    #[test]
    fn test_test_chambers_unregister_observer() {
        // Given
        let journal = CallJournal::new();
        let observer = Rc::new(journal.observer(0));
        let mut chambers = TestChambers::default();
        chambers.register_observer(observer.clone());

        // When
        chambers.unregister_observer(observer);
        chambers.set_test_chamber_number(3);

        // Then
        assert!(journal.notifications().is_empty());
    }

    #[test]
    fn test_sync_test_chambers_shared_between_threads() {
        // Given
        let chambers = Arc::new(SyncTestChambers::default());
        chambers.register_observer(Arc::new(CheeringObserver)).unwrap();

        // When
        let handles = (0..8)
            .map(|_| {
                let chambers = chambers.clone();
                thread::spawn(move || chambers.next_test_chamber().unwrap())
            })
            .collect::<Vec<_>>();
        let mut seen = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();
        seen.sort();

        // Then
        assert_eq!((1..=8).collect::<Vec<i64>>(), seen);
        assert_eq!(8, chambers.test_chamber_number().unwrap());
    }
}
