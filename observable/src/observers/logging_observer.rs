use std::fmt::Display;

use common::subject_observer::PropertyObserver;
use log::info;

/// Logs every change that carries a value; notifications without a value are
/// ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl LoggingObserver {
    fn will_change_message<T: Display>(
        property_name: &str,
        new_value: Option<T>,
    ) -> Option<String> {
        new_value.map(|value| format!("Will change '{property_name}' to {value}"))
    }

    fn did_change_message<T: Display>(
        property_name: &str,
        old_value: Option<T>,
    ) -> Option<String> {
        old_value.map(|value| format!("Did change '{property_name}' from {value}"))
    }
}

impl<T: Display> PropertyObserver<T> for LoggingObserver {
    fn will_change(&self, property_name: &str, new_value: Option<T>) {
        if let Some(message) = Self::will_change_message(property_name, new_value) {
            info!("{message}");
        }
    }

    fn did_change(&self, property_name: &str, old_value: Option<T>) {
        if let Some(message) = Self::did_change_message(property_name, old_value) {
            info!("{message}");
        }
    }
}
