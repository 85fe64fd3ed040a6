const INGREDIENT_SEPARATOR: &str = ", ";

pub trait Coffee {
    fn cost(&self) -> f64;
    fn ingredients(&self) -> String;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> f64 {
        1.0
    }

    fn ingredients(&self) -> String {
        "Coffee".to_string()
    }
}

/// Wraps any coffee and adds one extra on top of it.
struct CoffeeDecorator {
    decorated_coffee: Box<dyn Coffee>,
    extra_cost: f64,
    extra_ingredient: &'static str,
}

impl Coffee for CoffeeDecorator {
    fn cost(&self) -> f64 {
        self.decorated_coffee.cost() + self.extra_cost
    }

    fn ingredients(&self) -> String {
        format!(
            "{}{INGREDIENT_SEPARATOR}{}",
            self.decorated_coffee.ingredients(),
            self.extra_ingredient
        )
    }
}

pub struct Milk(CoffeeDecorator);

pub struct WhipCoffee(CoffeeDecorator);

impl Milk {
    pub fn new(decorated_coffee: Box<dyn Coffee>) -> Self {
        Milk(CoffeeDecorator {
            decorated_coffee,
            extra_cost: 0.5,
            extra_ingredient: "Milk",
        })
    }
}

impl WhipCoffee {
    pub fn new(decorated_coffee: Box<dyn Coffee>) -> Self {
        WhipCoffee(CoffeeDecorator {
            decorated_coffee,
            extra_cost: 0.7,
            extra_ingredient: "Whip",
        })
    }
}

impl Coffee for Milk {
    fn cost(&self) -> f64 {
        self.0.cost()
    }

    fn ingredients(&self) -> String {
        self.0.ingredients()
    }
}

impl Coffee for WhipCoffee {
    fn cost(&self) -> f64 {
        self.0.cost()
    }

    fn ingredients(&self) -> String {
        self.0.ingredients()
    }
}
