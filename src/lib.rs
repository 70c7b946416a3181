//! Varport - design token export for design-tool variables
//!
//! Varport reads the local variables of a design file (collections, modes,
//! variables and aliases) and exports one collection mode as a token
//! document: CSS custom properties, a camelCase object, a nested
//! dot-notation object, a W3C design token document, or a minimized set
//! holding every distinct value once.
//!
//! ## Module Structure
//!
//! - `model`: Host variable data model
//! - `source`: Variable source trait, JSON snapshot source, batch fetching
//! - `naming`: Token name transformation per export format
//! - `resolve`: Alias resolution to literal values or token references
//! - `format`: Export formats and document generators
//! - `minimize`: Minimized-set deduplication
//! - `document`: Token documents and rendering
//! - `export`: Export pipeline and its notices
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod document;
pub mod export;
pub mod format;
pub mod mcp;
pub mod minimize;
pub mod model;
pub mod naming;
pub mod resolve;
pub mod source;
