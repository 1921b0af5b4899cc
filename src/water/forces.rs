//! Pure force laws.
//!
//! Each function maps the current state of one particle (and a neighbor or
//! an effect center) to a velocity delta. All of them guard against the
//! zero-distance case: a coincident pair has no defined direction, so it
//! contributes exactly `Vec2::ZERO` rather than a NaN.
//!
//! The pairwise laws (spring, tension) are applied symmetrically by the
//! caller: evaluating the law from both endpoints yields equal and opposite
//! deltas, so the pass conserves momentum.

use bevy::prelude::*;

use super::params::WaterParams;

/// Hookean restoring impulse on a particle at `position` from a neighbor
/// at `other`.
///
/// Active for `0 < distance < separation`. The force magnitude is
/// `k * (distance - separation)`, negative inside the band, so the impulse
/// points away from the neighbor when the pair is too close and toward it
/// when stretched. `spread` scales the result before it reaches a velocity.
pub fn spring_impulse(position: Vec2, other: Vec2, params: &WaterParams) -> Vec2 {
    let offset = other - position;
    let distance = offset.length();

    if distance >= params.separation || distance <= 0.0 {
        return Vec2::ZERO;
    }

    let force = params.spring_constant * (distance - params.separation);
    force * params.spread * (offset / distance)
}

/// Attractive surface tension impulse on a particle at `position` from a
/// neighbor at `other`.
///
/// Active for `separation < distance < 2 * separation`, with magnitude
/// `tension * (2 * separation - distance)`. Vanishes at both edges of the
/// band, so it hands over smoothly to the spring on the inside and to
/// nothing on the outside.
pub fn tension_impulse(position: Vec2, other: Vec2, params: &WaterParams) -> Vec2 {
    let offset = other - position;
    let distance = offset.length();

    if distance <= params.separation || distance >= params.tension_radius() {
        return Vec2::ZERO;
    }

    let force = params.tension * (params.tension_radius() - distance);
    force * (offset / distance)
}

/// Repulsive ripple impulse on a particle at `position`, radiating from an
/// insertion point at `center`.
///
/// Active for `0 < distance < ripple_radius`, strongest right next to the
/// center and fading linearly to zero at the radius. Points away from the
/// center.
pub fn ripple_impulse(position: Vec2, center: Vec2, params: &WaterParams) -> Vec2 {
    let offset = center - position;
    let distance = offset.length();

    if distance >= params.ripple_radius || distance <= 0.0 {
        return Vec2::ZERO;
    }

    let force = params.ripple_factor * (params.ripple_radius - distance);
    -force * (offset / distance)
}

/// Oscillatory wave impulse on a particle at `position`, radiating from an
/// insertion point at `center`.
///
/// Active for `0 < distance < wave_radius`, with magnitude
/// `wave_factor * sin(distance * wave_frequency)` applied along the RAW
/// (non-normalized) offset toward the center. The missing normalization is
/// deliberate: the extra factor of `distance` is part of how a splash
/// looks. Do not "fix" it.
pub fn wave_impulse(position: Vec2, center: Vec2, params: &WaterParams) -> Vec2 {
    let offset = center - position;
    let distance = offset.length();

    if distance >= params.wave_radius || distance <= 0.0 {
        return Vec2::ZERO;
    }

    params.wave_factor * (distance * params.wave_frequency).sin() * offset
}
