// glbinder/src/error.rs
//
//! Various errors that methods can produce.

use crate::types::GLenum;

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

/// Various errors that methods can produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// `initialize()` was called on a loader that is already initialized.
    AlreadyInitialized,
    /// The loader must be initialized before this method can be called.
    NotInitialized,
    /// One of the functions needed to negotiate the version and extensions couldn't be found.
    ///
    /// This usually means no context was current when the loader was initialized.
    BootstrapFunctionNotFound(&'static str),
    /// The driver reported an error.
    GL(GLError),
}

/// Errors that the OpenGL driver reports through `glGetError`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GLError {
    /// An enumeration parameter is not a legal enumeration for that function.
    InvalidEnum,
    /// A value parameter is not a legal value for that function.
    InvalidValue,
    /// The set of state for a command is not legal for the parameters given to that command.
    InvalidOperation,
    /// The framebuffer object bound to the target is not complete.
    InvalidFramebufferOperation,
    /// There is not enough memory left to execute the command.
    OutOfMemory,
    /// A stack pushing operation would overflow the stack.
    StackOverflow,
    /// A stack popping operation would underflow the stack.
    StackUnderflow,
    /// A code the loader doesn't know about.
    Unknown(GLenum),
}

/// Translation of raw `glGetError` codes.
pub(crate) trait ToGLError {
    /// Returns `None` for `GL_NO_ERROR`.
    fn to_gl_error(self) -> Option<GLError>;
}

impl ToGLError for GLenum {
    fn to_gl_error(self) -> Option<GLError> {
        match self {
            glow::NO_ERROR => None,
            glow::INVALID_ENUM => Some(GLError::InvalidEnum),
            glow::INVALID_VALUE => Some(GLError::InvalidValue),
            glow::INVALID_OPERATION => Some(GLError::InvalidOperation),
            glow::INVALID_FRAMEBUFFER_OPERATION => Some(GLError::InvalidFramebufferOperation),
            glow::OUT_OF_MEMORY => Some(GLError::OutOfMemory),
            glow::STACK_OVERFLOW => Some(GLError::StackOverflow),
            glow::STACK_UNDERFLOW => Some(GLError::StackUnderflow),
            code => Some(GLError::Unknown(code)),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::AlreadyInitialized => f.write_str("the GL loader is already initialized"),
            Error::NotInitialized => f.write_str("the GL loader has not been initialized"),
            Error::BootstrapFunctionNotFound(name) => {
                write!(f, "couldn't load {}; is a GL context current?", name)
            }
            Error::GL(ref error) => Display::fmt(error, f),
        }
    }
}

impl StdError for Error {}

impl Display for GLError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            GLError::InvalidEnum => f.write_str("GL_INVALID_ENUM: invalid argument"),
            GLError::InvalidValue => f.write_str("GL_INVALID_VALUE: invalid value"),
            GLError::InvalidOperation => {
                f.write_str("GL_INVALID_OPERATION: invalid call sequence")
            }
            GLError::InvalidFramebufferOperation => f.write_str(
                "GL_INVALID_FRAMEBUFFER_OPERATION: operation on an incomplete framebuffer",
            ),
            GLError::OutOfMemory => f.write_str("GL_OUT_OF_MEMORY: resources exhausted"),
            GLError::StackOverflow => f.write_str("GL_STACK_OVERFLOW"),
            GLError::StackUnderflow => f.write_str("GL_STACK_UNDERFLOW"),
            GLError::Unknown(code) => write!(f, "unknown GL error 0x{:04x}", code),
        }
    }
}

impl StdError for GLError {}

impl From<GLError> for Error {
    #[inline]
    fn from(error: GLError) -> Error {
        Error::GL(error)
    }
}
