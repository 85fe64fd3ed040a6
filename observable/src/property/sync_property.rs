use std::{
    fmt::Debug,
    mem,
    sync::{Arc, Mutex, MutexGuard},
};

use common::subject_observer::{ChangePhase, PropertyObserver};
use log::{debug, trace};

use crate::{ObservableError, ObservableResult};

use super::validate_name;

pub type SyncSharedObserver<T> = Arc<dyn PropertyObserver<T> + Send + Sync>;

struct PropertyState<T> {
    value: T,
    observers: Vec<SyncSharedObserver<T>>,
}

impl<T: Clone> PropertyState<T> {
    fn notify_observers(&self, name: &str, phase: ChangePhase, value: Option<T>) {
        for obs in &self.observers {
            phase.dispatch(obs.as_ref(), name, value.clone());
        }
    }
}

/// Thread-safe counterpart of [`super::ObservableProperty`].
///
/// The lock is held for the whole will-change/commit/did-change sequence, so
/// mutations are linearized and registrations never interleave with a
/// notification. Observers must not call back into the same property from a
/// callback: the lock is not reentrant.
pub struct SyncObservableProperty<T> {
    name: String,
    state: Mutex<PropertyState<T>>,
}

impl<T> SyncObservableProperty<T>
where
    T: Clone + Debug,
{
    pub fn try_new(name: impl Into<String>, value: T) -> ObservableResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self::named(name, value))
    }

    pub(crate) fn named(name: impl Into<String>, value: T) -> Self {
        SyncObservableProperty {
            name: name.into(),
            state: Mutex::new(PropertyState {
                value,
                observers: vec![],
            }),
        }
    }

    fn lock(&self) -> ObservableResult<MutexGuard<'_, PropertyState<T>>> {
        self.state.lock().map_err(|_| ObservableError::Poisoned)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> ObservableResult<T> {
        Ok(self.lock()?.value.clone())
    }

    pub fn observer_count(&self) -> ObservableResult<usize> {
        Ok(self.lock()?.observers.len())
    }

    pub fn register_observer(&self, observer: SyncSharedObserver<T>) -> ObservableResult<()> {
        let mut state = self.lock()?;
        state.observers.push(observer);
        trace!(
            "Registered observer on '{}' ({} registered)",
            self.name,
            state.observers.len()
        );
        Ok(())
    }

    pub fn unregister_observer(&self, observer: &SyncSharedObserver<T>) -> ObservableResult<()> {
        self.lock()?
            .observers
            .retain(|obs| !Arc::ptr_eq(obs, observer));
        Ok(())
    }

    pub fn set(&self, new_value: T) -> ObservableResult<()> {
        let mut state = self.lock()?;
        self.commit(&mut state, new_value);
        Ok(())
    }

    /// Read-modify-write under a single lock acquisition.
    pub fn update<F>(&self, f: F) -> ObservableResult<T>
    where
        F: FnOnce(&T) -> T,
    {
        let mut state = self.lock()?;
        let new_value = f(&state.value);
        self.commit(&mut state, new_value.clone());
        Ok(new_value)
    }

    fn commit(&self, state: &mut PropertyState<T>, new_value: T) {
        debug!(
            "Changing '{}' from {:?} to {:?}",
            self.name, state.value, new_value
        );
        state.notify_observers(&self.name, ChangePhase::WillChange, Some(new_value.clone()));
        let old_value = mem::replace(&mut state.value, new_value);
        state.notify_observers(&self.name, ChangePhase::DidChange, Some(old_value));
    }
}

#[cfg(test)]
mod tests {
    use std::{
        panic::{self, AssertUnwindSafe},
        sync::{Arc, Mutex},
        thread,
    };

    use common::subject_observer::PropertyObserver;

    use crate::ObservableError;

    use super::{SyncObservableProperty, SyncSharedObserver};

    /// Records `(phase, value)` pairs; a linearized property never lets two
    /// `will` entries follow each other.
    #[derive(Default)]
    struct PhaseLog {
        entries: Mutex<Vec<(char, i64)>>,
    }

    impl PropertyObserver<i64> for PhaseLog {
        fn will_change(&self, _property_name: &str, new_value: Option<i64>) {
            if let Some(value) = new_value {
                self.entries.lock().unwrap().push(('w', value));
            }
        }

        fn did_change(&self, _property_name: &str, old_value: Option<i64>) {
            if let Some(value) = old_value {
                self.entries.lock().unwrap().push(('d', value));
            }
        }
    }

    struct Panicking;

    impl PropertyObserver<i64> for Panicking {
        fn will_change(&self, _property_name: &str, _new_value: Option<i64>) {
            panic!("observer failure");
        }

        fn did_change(&self, _property_name: &str, _old_value: Option<i64>) {}
    }

    #[test]
    fn test_sync_observable_property_try_new() {
        assert!(matches!(
            SyncObservableProperty::try_new("", 0i64),
            Err(ObservableError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sync_observable_property_concurrent_updates_are_linearized() {
        // Given
        let property = Arc::new(SyncObservableProperty::try_new("counter", 0i64).unwrap());
        let log = Arc::new(PhaseLog::default());
        property.register_observer(log.clone()).unwrap();
        let threads = 4;
        let increments = 50;

        // When
        let handles = (0..threads)
            .map(|_| {
                let property = property.clone();
                thread::spawn(move || {
                    for _ in 0..increments {
                        property.update(|value| value + 1).unwrap();
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        // Then
        let total = threads * increments;
        assert_eq!(total, property.get().unwrap());
        let entries = log.entries.lock().unwrap();
        assert_eq!(2 * total as usize, entries.len());
        for (index, pair) in entries.chunks(2).enumerate() {
            let index = index as i64;
            assert_eq!(
                [('w', index + 1), ('d', index)],
                [pair[0], pair[1]],
                "Should never interleave two mutations"
            );
        }
    }

    #[test]
    fn test_sync_observable_property_unregister_observer() {
        // Given
        let property = SyncObservableProperty::try_new("counter", 0i64).unwrap();
        let log = Arc::new(PhaseLog::default());
        let observer: SyncSharedObserver<i64> = log.clone();
        property.register_observer(observer.clone()).unwrap();

        // When
        property.unregister_observer(&observer).unwrap();
        property.set(7).unwrap();

        // Then
        assert_eq!(0, property.observer_count().unwrap());
        assert!(log.entries.lock().unwrap().is_empty());
        assert_eq!(7, property.get().unwrap());
    }

    #[test]
    fn test_sync_observable_property_panicking_observer_poisons() {
        // Given
        let property = SyncObservableProperty::try_new("counter", 0i64).unwrap();
        property.register_observer(Arc::new(Panicking)).unwrap();

        // When
        let result = panic::catch_unwind(AssertUnwindSafe(|| property.set(1)));

        // Then
        assert!(result.is_err(), "Should propagate the observer failure");
        assert_eq!(Err(ObservableError::Poisoned), property.get());
    }
}
