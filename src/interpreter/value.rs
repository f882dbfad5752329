/// Class representation.
///
/// Defines the `Class` and `Method` types. A class is immutable after
/// construction and carries an ordered method list plus an optional parent
/// for single inheritance. Method lookup walks the inheritance chain.
pub mod class;
/// Core value representation.
///
/// Defines the `Value` enum covering every runtime variant: the `None`
/// singleton, numbers, strings, booleans, classes and class instances.
/// Provides typed accessors used throughout evaluation.
pub mod core;
/// Class instance representation.
///
/// Defines the mutable field bag behind a shared handle. Field lookup
/// resolves the name `self` specially so that the back-reference never
/// forms an ownership cycle.
pub mod instance;
