/// Aiming interface of the legacy fire control, which only understands
/// single precision angles.
pub trait OlderDeathStarSuperlaserAiming {
    fn angle_v(&self) -> f32;
    fn angle_h(&self) -> f32;
}

/// Adaptee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathStarSuperlaserTarget {
    pub angle_horizontal: f64,
    pub angle_vertical: f64,
}

impl DeathStarSuperlaserTarget {
    pub fn new(angle_horizontal: f64, angle_vertical: f64) -> Self {
        DeathStarSuperlaserTarget {
            angle_horizontal,
            angle_vertical,
        }
    }
}

/// Adapter.
#[derive(Debug, Clone, Copy)]
pub struct OldDeathStarSuperlaserTarget {
    target: DeathStarSuperlaserTarget,
}

impl From<DeathStarSuperlaserTarget> for OldDeathStarSuperlaserTarget {
    fn from(target: DeathStarSuperlaserTarget) -> Self {
        OldDeathStarSuperlaserTarget { target }
    }
}

impl OlderDeathStarSuperlaserAiming for OldDeathStarSuperlaserTarget {
    fn angle_v(&self) -> f32 {
        self.target.angle_vertical as f32
    }

    fn angle_h(&self) -> f32 {
        self.target.angle_horizontal as f32
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DeathStarSuperlaserTarget, OldDeathStarSuperlaserTarget, OlderDeathStarSuperlaserAiming,
    };

    #[test]
    fn test_old_target_exposes_legacy_angles() {
        // Given
        let target = DeathStarSuperlaserTarget::new(14.0, 12.0);

        // When
        let old_format = OldDeathStarSuperlaserTarget::from(target);

        // Then
        assert_eq!(14.0, old_format.angle_h());
        assert_eq!(12.0, old_format.angle_v());
    }
}
