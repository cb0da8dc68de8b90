use glam::Vec3;

pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;

    /// Linear interpolation that returns `start` and `end` bit-exactly at
    /// `t <= 0` and `t >= 1`.
    #[inline]
    fn interpolate_clamped(start: Self, end: Self, t: f32) -> Self {
        if t <= 0.0 {
            start
        } else if t >= 1.0 {
            end
        } else {
            Self::interpolate_linear(start, end, t)
        }
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}
