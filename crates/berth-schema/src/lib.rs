//! Self-description schema dialects for berth artifacts.
//!
//! An artifact can describe how its configuration blob should be
//! interpreted — which keys to redact and which layers carry named
//! "addition" payloads. Two incompatible dialects exist:
//!
//! - [`v1`]: a versioned JSON schema embedded in the configuration blob
//!   under the reserved [`v1::RESERVED_ATTRIBUTES_KEY`] key. Declares
//!   additions.
//! - [`v1alpha`]: plain string annotations on the manifest's config
//!   descriptor. Declares no additions.
//!
//! Exactly one dialect applies to a given artifact; the processing layer
//! selects the dialect explicitly, never by sniffing.

pub mod v1;
pub mod v1alpha;
