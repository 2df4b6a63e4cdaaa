//! Unit tests for health clamping.
//! Covers heal and damage for typical, saturating, and inverted amounts.

use approx::assert_relative_eq;
use bodkin::Health;
use rstest::rstest;

#[rstest]
#[case::partial_heal(5.0, 3.0, 8.0)]
#[case::saturating_heal(5.0, 50.0, 10.0)]
#[case::exact_heal_to_max(5.0, 5.0, 10.0)]
#[case::negative_amount_inverts(5.0, -3.0, 2.0)]
#[case::zero_is_noop(5.0, 0.0, 5.0)]
fn heal_cases(#[case] start: f32, #[case] amount: f32, #[case] expected: f32) {
    let mut health = Health::new(start, 10.0);
    health.heal(amount);
    assert_relative_eq!(health.current, expected);
}

#[rstest]
#[case::partial_damage(5.0, -3.0, 2.0)]
#[case::lethal_damage(5.0, -50.0, 0.0)]
#[case::exact_damage_to_zero(5.0, -5.0, 0.0)]
#[case::positive_amount_inverts(5.0, 3.0, 8.0)]
#[case::zero_is_noop(5.0, 0.0, 5.0)]
fn take_damage_cases(#[case] start: f32, #[case] amount: f32, #[case] expected: f32) {
    let mut health = Health::new(start, 10.0);
    health.take_damage(amount);
    assert_relative_eq!(health.current, expected);
}

#[rstest]
#[case(-1.0)]
#[case(0.0)]
#[case(1.0)]
#[case(100.0)]
fn heal_preserves_bounds(#[case] amount: f32) {
    let mut health = Health::new(5.0, 10.0);
    health.heal(amount);
    assert!(health.current >= 0.0);
    assert!(health.current <= health.max);
}

#[rstest]
#[case(-100.0)]
#[case(-1.0)]
#[case(0.0)]
#[case(1.0)]
fn damage_preserves_bounds(#[case] amount: f32) {
    let mut health = Health::new(5.0, 10.0);
    health.take_damage(amount);
    assert!(health.current >= 0.0);
    assert!(health.current <= health.max);
}
