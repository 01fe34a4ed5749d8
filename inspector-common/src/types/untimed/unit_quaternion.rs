use nalgebra::UnitQuaternion as NUnitQuaternion;

pub const N_QUATERNION_COORDINATES: usize = 4;

const X_COORD_IDX: usize = 0;
const Y_COORD_IDX: usize = 1;
const Z_COORD_IDX: usize = 2;
const W_COORD_IDX: usize = 3;

/// Orientation measurement backed by a nalgebra unit quaternion.
///
/// Components are ordered `x, y, z, w`, the order the platform delivers a
/// rotation vector in. The `w` component is optional on the wire and is
/// reconstructed from the unit-norm constraint when absent.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitQuaternion(NUnitQuaternion<f64>);

impl UnitQuaternion {
    /// Components ordered `x, y, z, w`.
    pub fn new(data: [f64; N_QUATERNION_COORDINATES]) -> Self {
        let quaternion = nalgebra::Quaternion::new(
            data[W_COORD_IDX],
            data[X_COORD_IDX],
            data[Y_COORD_IDX],
            data[Z_COORD_IDX],
        );
        Self(NUnitQuaternion::from_quaternion(quaternion))
    }

    pub fn from_unit_quaternion(unit_quaternion: NUnitQuaternion<f64>) -> Self {
        Self(unit_quaternion)
    }

    pub fn from_euler_angles(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self(NUnitQuaternion::from_euler_angles(roll, pitch, yaw))
    }

    pub fn inner(&self) -> NUnitQuaternion<f64> {
        self.0
    }

    /// Components ordered `x, y, z, w`.
    pub fn components(&self) -> [f64; N_QUATERNION_COORDINATES] {
        [self.0.i, self.0.j, self.0.k, self.0.w]
    }
}

impl Default for UnitQuaternion {
    fn default() -> Self {
        Self(NUnitQuaternion::identity())
    }
}

impl From<[f64; N_QUATERNION_COORDINATES]> for UnitQuaternion {
    fn from(value: [f64; N_QUATERNION_COORDINATES]) -> Self {
        Self::new(value)
    }
}

impl From<UnitQuaternion> for [f64; N_QUATERNION_COORDINATES] {
    fn from(value: UnitQuaternion) -> Self {
        value.components()
    }
}

impl From<UnitQuaternion> for Vec<f64> {
    fn from(value: UnitQuaternion) -> Self {
        value.components().to_vec()
    }
}

impl TryFrom<Vec<f64>> for UnitQuaternion {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        match value.len() {
            N_QUATERNION_COORDINATES => {
                let array: [f64; N_QUATERNION_COORDINATES] =
                    value.try_into().map_err(|_| "Conversion failed")?;
                Ok(Self::new(array))
            }
            3 => {
                // w left implicit by the platform: reconstruct it from the
                // unit-norm constraint, clamping against rounding drift
                let (x, y, z) = (value[0], value[1], value[2]);
                let w = (1.0 - x * x - y * y - z * z).max(0.0).sqrt();
                Ok(Self::new([x, y, z, w]))
            }
            _ => Err("Can't convert to UnitQuaternion"),
        }
    }
}
