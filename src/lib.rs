//! Role-based authorization core for Asset Administration Shell services.
//!
//! The crate gates every read/write operation against Shells, Submodels,
//! Submodel Elements and Files: a declarative rule set is loaded once at
//! startup, per-resource authorizers translate intercepted operations into
//! (action, target) checks, and decorators apply those checks transparently
//! around any implementation of the resource traits.

pub mod api;
pub mod authorizer;
pub mod config;
pub mod decorator;
pub mod resolver;
pub mod response;
pub mod rules;
pub mod subject;
