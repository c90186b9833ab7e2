use crate::systems::physics::PhysicsEngine;

/// What one host frame did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub stepped: bool,
    pub rendered: bool,
}

/// Fixed-step driver for the engine, ticked once per host frame
#[derive(Clone, Debug, PartialEq)]
pub struct Runner {
    delta_ms: f64,
    running: bool,
    steps: u64,
}

impl Runner {
    pub fn new(delta_ms: f64) -> Self {
        Self {
            delta_ms,
            running: false,
            steps: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Step the engine once when running
    pub fn tick<E: PhysicsEngine>(&mut self, engine: &mut E) -> bool {
        if !self.running {
            return false;
        }
        engine.step(self.delta_ms);
        self.steps += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::physics::HeadlessEngine;

    #[test]
    fn stopped_runner_leaves_the_engine_alone() {
        let mut engine = HeadlessEngine::new();
        let mut runner = Runner::new(10.0);
        assert!(!runner.tick(&mut engine));
        runner.start();
        assert!(runner.tick(&mut engine));
        runner.stop();
        assert!(!runner.tick(&mut engine));
        assert_eq!(runner.steps(), 1);
        assert_eq!(engine.timing().timestamp_ms, 10.0);
    }
}
