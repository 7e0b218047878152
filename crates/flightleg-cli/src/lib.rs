//! Command-line front end for the flight-leg solver.

pub mod format;
