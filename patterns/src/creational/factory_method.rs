use log::info;

pub trait Currency {
    fn code(&self) -> &'static str;
}

pub struct Euro;

pub struct UnitedStatesDollar;

impl Currency for Euro {
    fn code(&self) -> &'static str {
        "EUR"
    }
}

impl Currency for UnitedStatesDollar {
    fn code(&self) -> &'static str {
        "USD"
    }
}

pub trait CurrencyConverter {
    /// Factory method: each converter decides which currency it targets.
    fn target_currency(&self) -> Box<dyn Currency>;

    fn convert(&self, from: &dyn Currency) -> String {
        let target = self.target_currency();
        let message = format!("From {} to {}", from.code(), target.code());
        info!("{message}");
        message
    }
}

pub struct EuroConverter;

pub struct DollarConverter;

impl CurrencyConverter for EuroConverter {
    fn target_currency(&self) -> Box<dyn Currency> {
        Box::new(Euro)
    }
}

impl CurrencyConverter for DollarConverter {
    fn target_currency(&self) -> Box<dyn Currency> {
        Box::new(UnitedStatesDollar)
    }
}
