#![allow(non_snake_case)]
//! different utility modules used throughout the project
/// tiny module to plot convergence curves and operator sparsity patterns
pub mod plots;
/// tiny module to initialize terminal logging
pub mod logger;
