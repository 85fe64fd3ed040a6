use std::sync::{
    atomic::{AtomicUsize, Ordering},
    OnceLock,
};

static SHARED_INSTANCE: OnceLock<DeathStarSuperlaser> = OnceLock::new();

/// Only reachable through [`DeathStarSuperlaser::shared_instance`]; the private
/// field keeps other modules from building a second one.
#[derive(Debug)]
pub struct DeathStarSuperlaser {
    shots_fired: AtomicUsize,
}

impl DeathStarSuperlaser {
    pub fn shared_instance() -> &'static DeathStarSuperlaser {
        SHARED_INSTANCE.get_or_init(|| DeathStarSuperlaser {
            shots_fired: AtomicUsize::new(0),
        })
    }

    /// Returns the number of shots fired so far, this one included.
    pub fn fire(&self) -> usize {
        self.shots_fired.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired.load(Ordering::SeqCst)
    }
}
