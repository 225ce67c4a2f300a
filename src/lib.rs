pub mod api;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod error;
pub mod keylength;
pub mod language;
pub mod optimizer;
pub mod scorer;
pub mod solvers;
pub mod stats;
pub mod text;
// cmd and reports belong to the binary crate (main.rs).
