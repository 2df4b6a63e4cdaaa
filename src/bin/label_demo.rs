//! Minimal named-value demo.
//!
//! A bare entity gains a string value purely by carrying a [`Label`]
//! component; no entity type declares the field. Prints the value before
//! and after setting it.

use bevy::prelude::World;

use bodkin::Label;

#[expect(clippy::print_stdout, reason = "stdout is the demo's observable output")]
fn main() {
    let mut world = World::new();
    let foo = world.spawn(Label::default()).id();

    if let Some(label) = world.get::<Label>(foo) {
        println!("foo.getValue(): {}", label.value());
    }

    if let Some(mut label) = world.get_mut::<Label>(foo) {
        label.set_value("Hello World!");
    }

    if let Some(label) = world.get::<Label>(foo) {
        println!("foo.getValue(): {}", label.value());
    }
}
