//! Digital signature schemes.
//!
//! The single scheme here is qDSA over the Gaudry-Schost Kummer surface.
//! It is implemented directly against the crate's field, scalar, point
//! and sponge primitives, with no shared signature abstraction: the
//! functions mirror the scheme's specification and nothing else.

pub mod qdsa;
