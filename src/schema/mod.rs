//! Declarative tree shapes.
//!
//! A shape file names a root and the members hanging off it. Members are
//! leaves, inline nested shapes, or references to named fragments that are
//! declared separately and attached where they are used.

pub mod builder;
pub mod check;
pub mod error;
pub mod shape_model;
