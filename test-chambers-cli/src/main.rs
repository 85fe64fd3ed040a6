mod config;
mod error;

use common::subject_observer::Subject;
use log::{debug, info};
use observable::{TestChambers, TEST_CHAMBER_NUMBER_NAME};

use crate::config::app::AppConfig;
use error::AppError;

fn run(config: &AppConfig) -> TestChambers {
    let mut test_chambers = TestChambers::new(config.initial_value);
    for kind in &config.observers {
        debug!("Registering {kind} observer");
        test_chambers.register_observer(kind.build());
    }

    for &value in &config.assignments {
        test_chambers.set_test_chamber_number(value);
    }
    test_chambers
}

fn main() -> Result<(), AppError> {
    crate::config::log::init()?;

    let config = AppConfig::new()?;
    debug!("Running test chambers with configuration: {:?}", config);

    let test_chambers = run(&config);
    info!(
        "'{}' ended at {}",
        TEST_CHAMBER_NUMBER_NAME,
        test_chambers.test_chamber_number()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use observable::observers::ObserverKind;

    use crate::{config::app::AppConfig, run};

    #[test]
    fn test_run() {
        // Given
        let config = AppConfig {
            initial_value: 7,
            assignments: vec![1, 5, -2],
            observers: vec![ObserverKind::Logging, ObserverKind::Cheering],
        };

        // When
        let result = run(&config);

        // Then
        assert_eq!(-2, result.test_chamber_number());
        assert_eq!(2, result.observer_count());
    }

    #[test]
    fn test_run_without_assignments() {
        // Given
        let config = AppConfig {
            initial_value: 7,
            assignments: vec![],
            observers: vec![],
        };

        // When
        let result = run(&config);

        // Then
        assert_eq!(7, result.test_chamber_number());
        assert_eq!(0, result.observer_count());
    }
}
