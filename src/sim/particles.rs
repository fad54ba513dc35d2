//! Particle Effect System
//!
//! Transient radial bursts spawned on block destruction. Purely cosmetic:
//! particles never affect gameplay.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{BlockColor, Particle, MAX_PARTICLES};

/// Particles per destruction burst
pub const BURST_COUNT: usize = 15;
/// Constant downward acceleration per tick
pub const PARTICLE_GRAVITY: f32 = 0.1;
/// Opacity is life divided by this
pub const ALPHA_NORM: f32 = 50.0;

/// Spawn a burst at `origin` with the destroyed block's color.
///
/// When the collection is at [`MAX_PARTICLES`], the oldest particles are
/// evicted to make room.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    origin: Vec2,
    color: BlockColor,
) {
    for _ in 0..BURST_COUNT {
        if particles.len() >= MAX_PARTICLES {
            particles.remove(0);
        }
        let angle = rng.random_range(0.0..TAU);
        let speed = 1.0 + rng.random_range(0.0..3.0);
        let size = 1.0 + rng.random_range(0.0..3.0);
        let life = 30.0 + rng.random_range(0.0..20.0);
        particles.push(Particle {
            pos: origin,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            size,
            color,
            life,
            alpha: 1.0,
        });
    }
}

/// Advance every particle by one tick and drop the dead ones in the same pass
pub fn advance(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.vel.y += PARTICLE_GRAVITY;
        p.life -= 1.0;
        p.alpha = p.life / ALPHA_NORM;
    }
    particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_burst_spawns_fixed_count() {
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng(), Vec2::new(100.0, 100.0), BlockColor::Cyan);
        assert_eq!(particles.len(), BURST_COUNT);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(100.0, 100.0));
            assert_eq!(p.alpha, 1.0);
            assert!(p.life >= 30.0 && p.life < 50.0);
            assert!(p.size >= 1.0 && p.size < 4.0);
            let speed = p.vel.length();
            assert!(speed >= 1.0 && speed < 4.0 + 1e-4);
        }
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let mut particles = Vec::new();
        let mut rng = rng();
        // Fill to the cap, tagging the first burst by position
        spawn_burst(&mut particles, &mut rng, Vec2::new(1.0, 1.0), BlockColor::Red);
        while particles.len() < MAX_PARTICLES {
            spawn_burst(&mut particles, &mut rng, Vec2::new(2.0, 2.0), BlockColor::Red);
        }
        assert_eq!(particles.len(), MAX_PARTICLES);

        spawn_burst(&mut particles, &mut rng, Vec2::new(3.0, 3.0), BlockColor::Red);
        assert_eq!(particles.len(), MAX_PARTICLES);
        // The first burst was evicted, not the newest
        assert!(particles.iter().all(|p| p.pos != Vec2::new(1.0, 1.0)));
        assert_eq!(
            particles.iter().filter(|p| p.pos == Vec2::new(3.0, 3.0)).count(),
            BURST_COUNT
        );
    }

    #[test]
    fn test_life_strictly_decreasing_until_removal() {
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng(), Vec2::ZERO, BlockColor::Green);
        let mut prev: Vec<f32> = particles.iter().map(|p| p.life).collect();

        // Minimum initial life is 30, so no removals happen before tick 30
        for _ in 0..29 {
            advance(&mut particles);
            assert_eq!(particles.len(), BURST_COUNT);
            for (p, &old) in particles.iter().zip(prev.iter()) {
                assert!(p.life < old);
                assert!((p.alpha - p.life / ALPHA_NORM).abs() < 1e-6);
            }
            prev = particles.iter().map(|p| p.life).collect();
        }
        // Max initial life is < 50, so 50 ticks kills everything
        for _ in 0..21 {
            advance(&mut particles);
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_removed_the_tick_life_crosses_zero() {
        let mut particles = vec![Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 2.0,
            color: BlockColor::Yellow,
            life: 1.0,
            alpha: 1.0 / ALPHA_NORM,
        }];
        advance(&mut particles);
        assert!(particles.is_empty());
    }

    #[test]
    fn test_gravity_pulls_downward() {
        let mut particles = vec![Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(0.0, -2.0),
            size: 2.0,
            color: BlockColor::Yellow,
            life: 40.0,
            alpha: 1.0,
        }];
        for _ in 0..5 {
            advance(&mut particles);
        }
        assert!((particles[0].vel.y - (-2.0 + 5.0 * PARTICLE_GRAVITY)).abs() < 1e-5);
    }

    #[test]
    fn test_same_seed_same_burst() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        spawn_burst(&mut a, &mut rng(), Vec2::ZERO, BlockColor::Red);
        spawn_burst(&mut b, &mut rng(), Vec2::ZERO, BlockColor::Red);
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.life, pb.life);
        }
    }
}
