mod cheering_observer;
mod logging_observer;

use std::{rc::Rc, sync::Arc};

pub use cheering_observer::{CheeringObserver, DID_CHANGE_CHEER, WILL_CHANGE_CHEER};
pub use logging_observer::LoggingObserver;

use common::subject_observer::SharedObserver;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::property::SyncSharedObserver;

/// Observer variants that can be selected by name, e.g. from configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ObserverKind {
    Logging,
    Cheering,
}

impl ObserverKind {
    pub fn build(self) -> SharedObserver<i64> {
        match self {
            ObserverKind::Logging => Rc::new(LoggingObserver),
            ObserverKind::Cheering => Rc::new(CheeringObserver),
        }
    }

    pub fn build_sync(self) -> SyncSharedObserver<i64> {
        match self {
            ObserverKind::Logging => Arc::new(LoggingObserver),
            ObserverKind::Cheering => Arc::new(CheeringObserver),
        }
    }
}
