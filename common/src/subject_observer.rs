use std::rc::Rc;

use strum::{Display, EnumIter};

/// Receives the two notification phases of a property mutation.
///
/// `new_value` is the value about to be committed, `old_value` the value that
/// was current before the commit. `None` means the subject had no value to
/// report.
pub trait PropertyObserver<T> {
    fn will_change(&self, property_name: &str, new_value: Option<T>);
    fn did_change(&self, property_name: &str, old_value: Option<T>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ChangePhase {
    WillChange,
    DidChange,
}

impl ChangePhase {
    pub fn dispatch<T, O>(self, observer: &O, property_name: &str, value: Option<T>)
    where
        O: PropertyObserver<T> + ?Sized,
    {
        match self {
            ChangePhase::WillChange => observer.will_change(property_name, value),
            ChangePhase::DidChange => observer.did_change(property_name, value),
        }
    }
}

pub type SharedObserver<T> = Rc<dyn PropertyObserver<T>>;

pub type SharedObservers<T> = Vec<SharedObserver<T>>;

/// Registration side of a subject. Notifications are only emitted by the
/// subject itself, around its own mutations.
pub trait Subject<T: Clone> {
    fn register_observer(&mut self, observer: SharedObserver<T>);
    fn unregister_observer(&mut self, observer: SharedObserver<T>);
}
