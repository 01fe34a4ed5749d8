/// Single-value measurement, e.g. a distance or an illuminance.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Scalar(f64);

impl Scalar {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Scalar> for f64 {
    fn from(value: Scalar) -> Self {
        value.0
    }
}

impl From<Scalar> for Vec<f64> {
    fn from(value: Scalar) -> Self {
        vec![value.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let scalar = Scalar::new(3.5);
        assert_eq!(scalar.inner(), 3.5);
        assert_eq!(f64::from(scalar), 3.5);
    }
}
