// glbinder/src/resolver.rs
//
//! Decides which entry point to request for a function, and requests it.

use crate::loader::{Initializer, Negotiated};
use crate::requirement::SymbolInfo;
use crate::stub::FailureReason;

use std::os::raw::c_void;

/// The result of resolving one function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Resolution {
    /// The driver's entry point. Never null.
    Bound(*const c_void),
    /// A stub must be installed instead.
    Stubbed(FailureReason),
}

/// Resolves a bootstrap function under its canonical name, ignoring requirements.
pub(crate) fn lookup(initializer: &mut dyn Initializer, symbol: &SymbolInfo) -> Resolution {
    request(initializer, symbol.name, None)
}

/// Resolves a function against the negotiated version, profile, and extensions.
///
/// If the function isn't core, each of its requirements is tried in order, skipping those
/// restricted to the other API. A requirement is satisfied when all the extensions of its
/// conjunction are supported, and the last satisfied requirement that names an alternate entry
/// point decides the name that is requested. When none is satisfied, the first missing extension
/// the active API could provide is reported.
pub(crate) fn resolve(
    initializer: &mut dyn Initializer,
    symbol: &SymbolInfo,
    negotiated: &Negotiated,
) -> Resolution {
    if symbol.is_core(negotiated.version(), negotiated.api()) {
        return request(initializer, symbol.name, None);
    }

    let mut name = symbol.name;
    let mut matched_extension = None;
    let mut first_missing = None;
    for requirement in symbol.requirements {
        if !requirement.applies_to(negotiated.api()) {
            continue;
        }
        // Version-only requirements have nothing to offer below their minimum.
        let extension = match requirement.extension {
            Some(extension) => extension,
            None => continue,
        };
        let missing = requirement
            .extensions()
            .find(|name| !negotiated.is_extension_supported(name));
        match missing {
            Some(missing) => {
                first_missing.get_or_insert(missing);
            }
            None => {
                matched_extension = Some(extension);
                if let Some(entry_point) = requirement.entry_point {
                    name = entry_point;
                }
            }
        }
    }

    match (matched_extension, first_missing) {
        (None, Some(extension)) => {
            Resolution::Stubbed(FailureReason::ExtensionUnsupported { extension })
        }
        (matched_extension, _) => request(initializer, name, matched_extension),
    }
}

fn request(
    initializer: &mut dyn Initializer,
    name: &'static str,
    extension: Option<&'static str>,
) -> Resolution {
    let pointer = initializer.get_proc_address(name);
    if pointer.is_null() {
        Resolution::Stubbed(FailureReason::DriverReturnedNull { extension, symbol: name })
    } else {
        Resolution::Bound(pointer)
    }
}
