// glbinder/src/stub.rs
//
//! Storage for loaded functions, and the stubs that stand in for missing ones.

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

/// Why a function couldn't be loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// The function needs an extension that the driver doesn't advertise.
    ExtensionUnsupported {
        /// The first required extension that is missing.
        extension: &'static str,
    },
    /// The driver returned no entry point.
    ///
    /// If `extension` is set, the driver advertises the extension but doesn't export the function
    /// that comes with it. Otherwise the function was expected to be core.
    DriverReturnedNull {
        /// The extension the function was loaded through, if any.
        extension: Option<&'static str>,
        /// The entry point that was requested.
        symbol: &'static str,
    },
}

impl Display for FailureReason {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            FailureReason::ExtensionUnsupported { extension } => {
                write!(f, "extension {} is not supported by the driver", extension)
            }
            FailureReason::DriverReturnedNull { extension: Some(extension), symbol } => write!(
                f,
                "extension {} is supported by the driver, but it returned no entry point for {}",
                extension, symbol
            ),
            FailureReason::DriverReturnedNull { extension: None, symbol } => {
                write!(f, "the driver returned no entry point for {}", symbol)
            }
        }
    }
}

impl StdError for FailureReason {}

/// A function that couldn't be loaded.
///
/// Holding a stub is harmless; calling through it panics with a message naming the function and
/// the reason it is unavailable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Stub {
    /// The canonical name of the missing function.
    pub(crate) function: &'static str,
    /// Why it is missing.
    pub(crate) reason: FailureReason,
}

impl Stub {
    #[inline]
    pub(crate) fn new(function: &'static str, reason: FailureReason) -> Stub {
        Stub { function, reason }
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn invoke(&self) -> ! {
        panic!("{}", self)
    }
}

impl Display for Stub {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} is unavailable: {}", self.function, self.reason)
    }
}

/// The load state of one function, as reported by `Gl::status()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolStatus {
    /// The loader hasn't been initialized.
    Unresolved,
    /// The function was loaded from the driver.
    Bound,
    /// A stub was installed in place of the function.
    Unavailable(FailureReason),
}

/// Holds either a driver function pointer or the stub standing in for it.
#[derive(Clone, Copy)]
pub(crate) enum Slot<F> {
    Unresolved,
    Bound(F),
    Stub(Stub),
}

impl<F> Slot<F>
where
    F: Copy,
{
    /// Returns the function pointer, or panics the way a stub does when it's called.
    #[inline(always)]
    pub(crate) fn get(&self, function: &'static str) -> F {
        match *self {
            Slot::Bound(pointer) => pointer,
            Slot::Stub(ref stub) => stub.invoke(),
            Slot::Unresolved => unresolved(function),
        }
    }

    pub(crate) fn status(&self) -> SymbolStatus {
        match *self {
            Slot::Unresolved => SymbolStatus::Unresolved,
            Slot::Bound(_) => SymbolStatus::Bound,
            Slot::Stub(ref stub) => SymbolStatus::Unavailable(stub.reason),
        }
    }
}

#[cold]
#[inline(never)]
fn unresolved(function: &'static str) -> ! {
    panic!("{} was called before the GL loader was initialized", function)
}
