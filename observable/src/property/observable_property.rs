use std::{fmt::Debug, mem, rc::Rc};

use common::subject_observer::{ChangePhase, SharedObserver, SharedObservers, Subject};
use log::{debug, trace};

use crate::ObservableResult;

use super::validate_name;

/// A named value that notifies its observers around every assignment.
///
/// Observers are called in registration order, first all `will_change` with
/// the proposed value, then the commit, then all `did_change` with the
/// previous value. Observers cannot veto or alter the committed value.
pub struct ObservableProperty<T> {
    name: String,
    value: T,
    observers: SharedObservers<T>,
}

impl<T> Subject<T> for ObservableProperty<T>
where
    T: Clone,
{
    fn register_observer(&mut self, observer: SharedObserver<T>) {
        self.observers.push(observer);
        trace!(
            "Registered observer on '{}' ({} registered)",
            self.name,
            self.observers.len()
        );
    }

    fn unregister_observer(&mut self, observer: SharedObserver<T>) {
        self.observers.retain(|obs| !Rc::ptr_eq(obs, &observer));
    }
}

impl<T> ObservableProperty<T>
where
    T: Clone + Debug,
{
    pub fn try_new(name: impl Into<String>, value: T) -> ObservableResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self::named(name, value))
    }

    pub(crate) fn named(name: impl Into<String>, value: T) -> Self {
        ObservableProperty {
            name: name.into(),
            value,
            observers: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set(&mut self, new_value: T) {
        debug!(
            "Changing '{}' from {:?} to {:?}",
            self.name, self.value, new_value
        );
        self.notify_observers(ChangePhase::WillChange, Some(new_value.clone()));
        let old_value = mem::replace(&mut self.value, new_value);
        self.notify_observers(ChangePhase::DidChange, Some(old_value));
    }

    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let new_value = f(&self.value);
        self.set(new_value);
    }

    fn notify_observers(&self, phase: ChangePhase, value: Option<T>) {
        trace!(
            "Notifying {} observers of '{}' ({phase})",
            self.observers.len(),
            self.name
        );
        for obs in &self.observers {
            phase.dispatch(obs.as_ref(), &self.name, value.clone());
        }
    }
}
