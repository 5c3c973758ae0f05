#![allow(non_snake_case)]
/// Simpson-style Newton-Cotes quadrature with an error-bound-driven step size
pub mod newton_cotes;
