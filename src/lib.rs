//! A minimal raster drawing demo built around midpoint line rasterization.
//!
//! The library holds the interesting pieces: a bounds-checked pixel
//! [`canvas`], the [`line`] rasterizer in its single-octant and full
//! 8-octant forms, and closed [`polygon`] figures over those lines.
//! The interactive window lives in the binary.

pub mod canvas;
pub mod line;
pub mod polygon;
