const PASSWORD: &str = "pass";
const ACCESS_DENIED: &str = "Access Denied. I'm afraid I can't do that.";

pub trait DoorOperator {
    fn open(&self, doors: &str) -> String;
}

pub struct Hal9000;

impl DoorOperator for Hal9000 {
    fn open(&self, doors: &str) -> String {
        format!("HAL9000: Affirmative, Dave. I read you. Opened {doors}.")
    }
}

/// Protection proxy: the real [`Hal9000`] only exists once authenticated.
#[derive(Default)]
pub struct CurrentComputer {
    computer: Option<Hal9000>,
}

impl CurrentComputer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticate(&mut self, password: &str) -> bool {
        if password != PASSWORD {
            return false;
        }
        self.computer = Some(Hal9000);
        true
    }
}

impl DoorOperator for CurrentComputer {
    fn open(&self, doors: &str) -> String {
        match &self.computer {
            Some(computer) => computer.open(doors),
            None => ACCESS_DENIED.to_string(),
        }
    }
}
