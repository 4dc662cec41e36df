//! Core pipeline for the Fourier gallery: a fixed catalog of analytic
//! signals, a uniform sampler over a symmetric time window, and a spectral
//! analyzer that turns amplitude sequences into discrete spectra. The
//! output of [`pipeline::run`] is pure data; rendering lives elsewhere.

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod catalog;
pub mod pipeline;
pub mod sampling;
pub mod spectrum;
