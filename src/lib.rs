//! Tearable Verlet cloth for interactive 2D simulations.
//!
//! `tearable` models a cloth as a grid of point masses joined by distance
//! constraints. Particles move by explicit Verlet integration, constraints
//! are satisfied by a fixed number of relaxation passes per frame, and a
//! pointer interaction layer lets the host drag particles or cut links
//! along a drawn path.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Relaxation solver**: Fixed-pass Gauss-Seidel over distance constraints
//! - **Cutting**: Path-based constraint severing via strict segment crossing
//! - **Dragging**: First-hit particle picking with hard position override
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use tearable::{Cloth, ClothConfig, NoOpStepObserver, PointerButton, PointerEvent, Vec2};
//!
//! let config: ClothConfig<f32> = ClothConfig::new().with_grid(10, 10);
//! let mut cloth = Cloth::new(&config).unwrap();
//! let mut interaction = cloth.interaction();
//!
//! let start = cloth.position_at(0, 0) + Vec2::new(6.0, -2.0);
//! cloth.handle_event(&mut interaction, PointerEvent::Pressed { button: PointerButton::Secondary, position: start });
//! cloth.handle_event(&mut interaction, PointerEvent::Moved { position: start + Vec2::new(0.0, 20.0) });
//! cloth.step(&mut NoOpStepObserver);
//! assert!(cloth.active_constraint_count() < cloth.constraint_count());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod geometry;
pub mod solver;
pub mod interaction;
pub mod cloth;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::Constraint;
pub use geometry::{segments_intersect, polyline_intersects};
pub use solver::StepParams;
pub use interaction::{Interaction, InteractionOutcome, PointerButton, PointerEvent};
pub use cloth::Cloth;
pub use config::{ClothConfig, PinMode};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
