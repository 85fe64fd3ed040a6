use common::subject_observer::PropertyObserver;
use log::info;

pub const WILL_CHANGE_CHEER: &str = "Wooohooo";
pub const DID_CHANGE_CHEER: &str = "Yaaaaay";

/// Cheers on every notification, whatever the property or payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheeringObserver;

impl CheeringObserver {
    fn will_change_message<T>(_new_value: Option<T>) -> &'static str {
        WILL_CHANGE_CHEER
    }

    fn did_change_message<T>(_old_value: Option<T>) -> &'static str {
        DID_CHANGE_CHEER
    }
}

impl<T> PropertyObserver<T> for CheeringObserver {
    fn will_change(&self, _property_name: &str, new_value: Option<T>) {
        info!("{}", Self::will_change_message(new_value));
    }

    fn did_change(&self, _property_name: &str, old_value: Option<T>) {
        info!("{}", Self::did_change_message(old_value));
    }
}
