use std::{cell::RefCell, rc::Rc};

use common::subject_observer::{ChangePhase, PropertyObserver};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification<T> {
    pub observer: usize,
    pub phase: ChangePhase,
    pub property_name: String,
    pub value: Option<T>,
}

/// Journal shared by several [`RecordingObserver`]s so the interleaving of
/// their notifications can be asserted.
#[derive(Debug)]
pub struct CallJournal<T> {
    notifications: Rc<RefCell<Vec<Notification<T>>>>,
}

impl<T> Default for CallJournal<T> {
    fn default() -> Self {
        Self {
            notifications: Default::default(),
        }
    }
}

impl<T: Clone> CallJournal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observer(&self, id: usize) -> RecordingObserver<T> {
        RecordingObserver {
            id,
            notifications: self.notifications.clone(),
        }
    }

    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.notifications.borrow().clone()
    }

    pub fn clear(&self) {
        self.notifications.borrow_mut().clear();
    }
}

pub struct RecordingObserver<T> {
    id: usize,
    notifications: Rc<RefCell<Vec<Notification<T>>>>,
}

impl<T> RecordingObserver<T> {
    fn record(&self, phase: ChangePhase, property_name: &str, value: Option<T>) {
        self.notifications.borrow_mut().push(Notification {
            observer: self.id,
            phase,
            property_name: property_name.to_string(),
            value,
        });
    }
}

impl<T> PropertyObserver<T> for RecordingObserver<T> {
    fn will_change(&self, property_name: &str, new_value: Option<T>) {
        self.record(ChangePhase::WillChange, property_name, new_value);
    }

    fn did_change(&self, property_name: &str, old_value: Option<T>) {
        self.record(ChangePhase::DidChange, property_name, old_value);
    }
}
