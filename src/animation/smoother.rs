use crate::scene::Vec3;

/// One-pole follower: chases a target at `rate` per second without
/// overshooting, whatever the frame delta.
#[derive(Debug, Clone)]
pub struct Smoother {
    value: f32,
    rate: f32,
}

impl Smoother {
    pub fn new(value: f32, rate: f32) -> Self {
        Self { value, rate }
    }

    pub fn tick(&mut self, target: f32, delta: f32) -> f32 {
        let omega = self.rate * delta.max(0.0);
        let alpha = omega / (1.0 + omega);
        self.value += alpha * (target - self.value);
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Jump straight to `value`
    pub fn snap(&mut self, value: f32) {
        self.value = value;
    }
}

/// [`Smoother`] on each component of a vector
#[derive(Debug, Clone)]
pub struct VecSmoother {
    x: Smoother,
    y: Smoother,
    z: Smoother,
}

impl VecSmoother {
    pub fn new(value: Vec3, rate: f32) -> Self {
        Self {
            x: Smoother::new(value.x, rate),
            y: Smoother::new(value.y, rate),
            z: Smoother::new(value.z, rate),
        }
    }

    pub fn tick(&mut self, target: Vec3, delta: f32) -> Vec3 {
        Vec3::new(
            self.x.tick(target.x, delta),
            self.y.tick(target.y, delta),
            self.z.tick(target.z, delta),
        )
    }

    pub fn value(&self) -> Vec3 {
        Vec3::new(self.x.value(), self.y.value(), self.z.value())
    }

    pub fn snap(&mut self, value: Vec3) {
        self.x.snap(value.x);
        self.y.snap(value.y);
        self.z.snap(value.z);
    }
}
