//! qDSA signatures and Diffie-Hellman on the Gaudry-Schost Kummer surface
//!
//! This crate implements the qDSA signature scheme of Renes and Smith
//! (<https://arxiv.org/abs/1709.03358>) over the genus-2 Kummer surface of
//! Gaudry and Schost, together with an X25519-style key agreement on the
//! same surface and the "Bob Jr." sponge hash (reduced-round Keccak-f[800])
//! the scheme uses as its random oracle.
//!
//! The primary deployment target is signature verification in constrained
//! environments such as bootloaders, where the verifier is the only code
//! that ships. Key generation, signing and key agreement are available
//! behind the `full` feature (enabled by default); a
//! `default-features = false` build contains the verifier alone.
//!
//! # Module overview
//!
//! - `hash`
//!   The Bob Jr. sponge: Keccak-f[800] with 10 rounds, 68-byte rate and
//!   256-bit capacity, absorbing in overwrite mode. Used for key
//!   derivation, nonce generation and challenge hashing.
//!
//! - `kummer`
//!   The mathematical core: arithmetic in GF(2¹²⁷ − 1) and modulo the
//!   group order, Kummer surface point operations (differential
//!   double-and-add, Montgomery ladders, wrapping), point compression,
//!   and the biquadratic forms used by signature verification.
//!
//! - `signatures`
//!   The qDSA scheme itself: `keypair`, `sign`, `verify` and the two
//!   Diffie-Hellman entry points, over fixed-size byte arrays.
//!
//! # Design goals
//!
//! - No heap allocations; every computation runs in a small, bounded
//!   amount of stack.
//! - No I/O and no randomness inside the library. Signing is
//!   deterministic; seed material is the caller's responsibility.
//! - Constant-time field arithmetic and ladders wherever a secret is
//!   involved. Verification operates on public data only and is allowed
//!   to branch; it always uses the variable-time ladder.
//! - Minimal and explicit APIs with stable, well-defined byte layouts.
//!
//! This crate is a self-contained reimplementation and has not been
//! externally audited.

pub mod hash;
pub mod kummer;
pub mod signatures;
