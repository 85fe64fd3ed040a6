mod observable_property;
mod sync_property;

pub use observable_property::ObservableProperty;
pub use sync_property::{SyncObservableProperty, SyncSharedObserver};

use crate::{ObservableError, ObservableResult};

fn validate_name(name: &str) -> ObservableResult<()> {
    if name.trim().is_empty() {
        return Err(ObservableError::InvalidArgument(
            "property name must not be blank".to_string(),
        ));
    }
    Ok(())
}
