//! Argprov is an abstract argumentation semantics engine.
//!
//! Given an argumentation framework, the engine computes the extensions of the grounded, complete, preferred or stable semantics,
//! classifies each argument as accepted, rejected or undecided, and justifies each status with its provenance and a dispute tree.
//! Random frameworks and a few sample frameworks are also available to try the semantics out.

#![warn(missing_docs)]

pub mod aa;

pub mod engine;

pub mod error;

pub mod io;

pub mod solvers;

pub mod utils;
