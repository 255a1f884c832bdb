/// A persisted car record.
pub use models::car::Model as Car;

/// Validated input for the create use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub marca: String,
    pub cor: String,
    pub placa: String,
}

/// Optional filters for listing cars. A `None` field places no constraint;
/// present fields are AND-ed and compared without regard to case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilter {
    pub cor: Option<String>,
    pub marca: Option<String>,
}

impl CarFilter {
    pub fn new(cor: Option<String>, marca: Option<String>) -> Self {
        Self { cor: non_empty(cor), marca: non_empty(marca) }
    }

    pub fn is_empty(&self) -> bool {
        self.cor.is_none() && self.marca.is_none()
    }

    pub fn matches(&self, car: &Car) -> bool {
        field_matches(self.cor.as_deref(), &car.cor) && field_matches(self.marca.as_deref(), &car.marca)
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        None => true,
        Some(w) => w.to_lowercase() == actual.to_lowercase(),
    }
}
