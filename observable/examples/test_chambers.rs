use std::{env, rc::Rc, sync::Arc, thread};

use common::subject_observer::Subject;
use log::info;
use observable::{
    observers::{CheeringObserver, LoggingObserver, ObserverKind},
    SyncTestChambers, TestChambers,
};
use simple_logger::SimpleLogger;
use strum::IntoEnumIterator;

const WORKERS: usize = 4;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let steps = match env::args().nth(1) {
        Some(arg) => arg.parse::<u32>()?,
        None => 1,
    };

    let mut test_chambers = TestChambers::default();
    let observer = Rc::new(LoggingObserver);
    test_chambers.register_observer(observer.clone());
    test_chambers.register_observer(Rc::new(CheeringObserver));

    for _ in 0..steps {
        test_chambers.next_test_chamber();
    }

    test_chambers.unregister_observer(observer);

    info!(
        "Reached test chamber {}",
        test_chambers.test_chamber_number()
    );

    let shared_chambers = Arc::new(SyncTestChambers::default());
    for kind in ObserverKind::iter() {
        shared_chambers.register_observer(kind.build_sync())?;
    }

    let workers = (0..WORKERS)
        .map(|_| {
            let chambers = shared_chambers.clone();
            thread::spawn(move || -> anyhow::Result<()> {
                for _ in 0..steps {
                    chambers.next_test_chamber()?;
                }
                Ok(())
            })
        })
        .collect::<Vec<_>>();
    for worker in workers {
        worker
            .join()
            .map_err(|_| anyhow::anyhow!("test chamber worker panicked"))??;
    }

    info!(
        "{} workers reached test chamber {}",
        WORKERS,
        shared_chambers.test_chamber_number()?
    );
    Ok(())
}
