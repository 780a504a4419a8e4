// glbinder/src/loader.rs
//
//! Negotiation of the version and extensions, and loading of the function table.

use crate::bindings::Gl;
use crate::error::{Error, ToGLError};
use crate::extensions::{self, ExtensionSet};
use crate::info::{GLApi, GLVersion};
use crate::resolver::{self, Resolution};
use crate::stub::FailureReason;
use crate::types::{GLint, GLuint};
use crate::version::{self, DetectedVersion};

use bitflags::bitflags;
use log::{debug, info, warn};
use std::cell::Cell;
use std::marker::PhantomData;
use std::os::raw::c_void;

/// Bootstrap functions without which nothing can be negotiated.
const REQUIRED_BOOTSTRAP_FUNCTIONS: [&str; 3] = ["glGetError", "glGetString", "glGetIntegerv"];

/// Supplies function pointers from the windowing system.
///
/// `prepare()` is called at the start of `Loader::initialize()` and `cleanup()` at the end, even
/// if initialization fails.
pub trait Initializer {
    /// Makes the initializer ready to look up functions, e.g. by opening the GL library.
    fn prepare(&mut self) {}

    /// Releases whatever `prepare()` acquired that isn't needed to call the loaded functions.
    fn cleanup(&mut self) {}

    /// Returns the address of the named function, or null if the driver doesn't export it.
    fn get_proc_address(&mut self, symbol_name: &str) -> *const c_void;
}

/// An `Initializer` that looks functions up with a closure.
pub struct FnInitializer<F>(pub F);

impl<F> Initializer for FnInitializer<F>
where
    F: FnMut(&str) -> *const c_void,
{
    #[inline]
    fn get_proc_address(&mut self, symbol_name: &str) -> *const c_void {
        (self.0)(symbol_name)
    }
}

bitflags! {
    /// Optional steps of negotiation.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LoaderFlags: u8 {
        /// On OpenGL ES, trust the version string over `glGetIntegerv` when the two disagree.
        const DETECT_EMULATION         = 0x01;
        /// Record the framebuffer and renderbuffer bound when the loader is initialized.
        const CAPTURE_DEFAULT_BINDINGS = 0x02;
    }
}

/// Settings that control how a `Loader` negotiates with the driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderAttributes {
    pub flags: LoaderFlags,
    /// Assumed when a desktop driver reports a version that can't be parsed.
    pub fallback_gl_version: GLVersion,
    /// Assumed when an OpenGL ES driver reports a version that can't be parsed.
    pub fallback_gles_version: GLVersion,
}

impl Default for LoaderAttributes {
    fn default() -> LoaderAttributes {
        LoaderAttributes {
            flags: LoaderFlags::all(),
            fallback_gl_version: GLVersion::new(4, 6),
            fallback_gles_version: GLVersion::new(3, 2),
        }
    }
}

impl LoaderAttributes {
    #[inline]
    pub(crate) fn fallback_version(&self, api: GLApi) -> GLVersion {
        match api {
            GLApi::GL => self.fallback_gl_version,
            GLApi::GLES => self.fallback_gles_version,
        }
    }
}

/// What was negotiated with the driver.
#[derive(Clone, Debug, PartialEq)]
pub struct Negotiated {
    pub(crate) version: GLVersion,
    pub(crate) api: GLApi,
    pub(crate) emulated: bool,
    pub(crate) extensions: ExtensionSet,
    pub(crate) default_framebuffer: GLuint,
    pub(crate) default_renderbuffer: GLuint,
}

impl Default for Negotiated {
    fn default() -> Negotiated {
        Negotiated {
            version: GLVersion::default(),
            api: GLApi::GL,
            emulated: false,
            extensions: ExtensionSet::default(),
            default_framebuffer: 0,
            default_renderbuffer: 0,
        }
    }
}

impl Negotiated {
    #[inline]
    pub fn version(&self) -> GLVersion {
        self.version
    }

    #[inline]
    pub fn api(&self) -> GLApi {
        self.api
    }

    /// Returns true if the version string and the queried version disagreed on OpenGL ES.
    #[inline]
    pub fn is_emulated(&self) -> bool {
        self.emulated
    }

    #[inline]
    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    #[inline]
    pub fn is_extension_supported(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    /// The framebuffer that was bound when the loader was initialized.
    ///
    /// This is nonzero on platforms like iOS, where the window system draws into a framebuffer
    /// object.
    #[inline]
    pub fn default_framebuffer(&self) -> GLuint {
        self.default_framebuffer
    }

    #[inline]
    pub fn default_renderbuffer(&self) -> GLuint {
        self.default_renderbuffer
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Uninitialized,
    Initializing,
    Initialized,
}

/// Loads OpenGL functions for one native context.
///
/// The loader must only be used from one thread at a time, like the context itself, and only
/// while its context is current. It is `Send` but not `Sync`.
pub struct Loader {
    state: State,
    attributes: LoaderAttributes,
    negotiated: Negotiated,
    pub(crate) gl: Gl,
    unavailable: Vec<(&'static str, FailureReason)>,
    phantom: PhantomData<Cell<()>>,
}

impl Default for Loader {
    fn default() -> Loader {
        Loader::new(LoaderAttributes::default())
    }
}

impl Loader {
    pub fn new(attributes: LoaderAttributes) -> Loader {
        Loader {
            state: State::Uninitialized,
            attributes,
            negotiated: Negotiated::default(),
            gl: Gl::unresolved(),
            unavailable: vec![],
            phantom: PhantomData,
        }
    }

    /// Negotiates with the driver of the current context and loads every function.
    ///
    /// Functions that can't be loaded are replaced by stubs and reported through `log` and
    /// `unavailable_functions()`; they don't cause this method to fail.
    pub fn initialize(&mut self, initializer: &mut dyn Initializer) -> Result<(), Error> {
        if self.state != State::Uninitialized {
            return Err(Error::AlreadyInitialized);
        }

        self.state = State::Initializing;
        initializer.prepare();
        let result = self.negotiate(initializer);
        initializer.cleanup();

        match result {
            Ok(()) => {
                self.state = State::Initialized;
                Ok(())
            }
            Err(err) => {
                self.reset();
                Err(err)
            }
        }
    }

    fn negotiate(&mut self, initializer: &mut dyn Initializer) -> Result<(), Error> {
        let mut unavailable = vec![];
        self.gl.bind_bootstrap(|symbol| {
            let resolution = resolver::lookup(initializer, symbol);
            if let Resolution::Stubbed(reason) = resolution {
                unavailable.push((symbol.name, reason));
            }
            resolution
        });
        for &name in &REQUIRED_BOOTSTRAP_FUNCTIONS {
            if !self.gl.is_loaded(name) {
                return Err(Error::BootstrapFunctionNotFound(name));
            }
        }

        let DetectedVersion { api, version, emulated } =
            version::detect(&self.gl, &self.attributes);
        self.negotiated.api = api;
        self.negotiated.version = version;
        self.negotiated.emulated = emulated;
        self.negotiated.extensions = extensions::load(&self.gl, version, api);
        info!(
            "Negotiated {:?} {}.{}{} with {} extensions",
            api,
            version.major,
            version.minor,
            if emulated { " (emulated)" } else { "" },
            self.negotiated.extensions.len()
        );

        let negotiated = &self.negotiated;
        self.gl.bind_functions(|symbol| {
            let resolution = resolver::resolve(initializer, symbol, negotiated);
            if let Resolution::Stubbed(reason) = resolution {
                debug!("{} is unavailable: {}", symbol.name, reason);
                unavailable.push((symbol.name, reason));
            }
            resolution
        });
        if !unavailable.is_empty() {
            info!("{} GL functions are unavailable", unavailable.len());
        }
        self.unavailable = unavailable;

        if self.attributes.flags.contains(LoaderFlags::CAPTURE_DEFAULT_BINDINGS) {
            self.capture_default_bindings();
        }
        Ok(())
    }

    fn capture_default_bindings(&mut self) {
        let framebuffer = version::get_integer(&self.gl, glow::DRAW_FRAMEBUFFER_BINDING);
        let renderbuffer = version::get_integer(&self.gl, glow::RENDERBUFFER_BINDING);
        match (framebuffer, renderbuffer) {
            (Ok(framebuffer), Ok(renderbuffer)) => {
                self.negotiated.default_framebuffer = binding_name(framebuffer);
                self.negotiated.default_renderbuffer = binding_name(renderbuffer);
            }
            _ => warn!("Couldn't query the default framebuffer bindings"),
        }
        version::drain_errors(&self.gl);
    }

    /// Unloads every function and forgets what was negotiated.
    pub fn uninitialize(&mut self) -> Result<(), Error> {
        if self.state != State::Initialized {
            return Err(Error::NotInitialized);
        }
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.gl.clear();
        self.negotiated = Negotiated::default();
        self.unavailable.clear();
        self.state = State::Uninitialized;
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.state == State::Initialized
    }

    /// The loader's settings.
    #[inline]
    pub fn attributes(&self) -> &LoaderAttributes {
        &self.attributes
    }

    /// Everything negotiated with the driver.
    #[inline]
    pub fn negotiated(&self) -> Result<&Negotiated, Error> {
        match self.state {
            State::Initialized => Ok(&self.negotiated),
            State::Uninitialized | State::Initializing => Err(Error::NotInitialized),
        }
    }

    /// The loaded functions.
    #[inline]
    pub fn gl(&self) -> Result<&Gl, Error> {
        self.negotiated()?;
        Ok(&self.gl)
    }

    #[inline]
    pub fn major_version(&self) -> Result<u32, Error> {
        Ok(self.negotiated()?.version.major as u32)
    }

    #[inline]
    pub fn minor_version(&self) -> Result<u32, Error> {
        Ok(self.negotiated()?.version.minor as u32)
    }

    #[inline]
    pub fn version(&self) -> Result<GLVersion, Error> {
        Ok(self.negotiated()?.version)
    }

    #[inline]
    pub fn api(&self) -> Result<GLApi, Error> {
        Ok(self.negotiated()?.api)
    }

    #[inline]
    pub fn is_embedded_profile(&self) -> Result<bool, Error> {
        Ok(self.negotiated()?.api == GLApi::GLES)
    }

    #[inline]
    pub fn is_emulated(&self) -> Result<bool, Error> {
        Ok(self.negotiated()?.emulated)
    }

    /// Returns true if the negotiated version is `major.minor` or newer.
    #[inline]
    pub fn is_version_at_least(&self, major: u32, minor: u32) -> Result<bool, Error> {
        Ok(self.negotiated()?.version.is_at_least(major, minor))
    }

    /// Returns true if the negotiated version is `major.minor` or older.
    #[inline]
    pub fn is_version_at_most(&self, major: u32, minor: u32) -> Result<bool, Error> {
        Ok(self.negotiated()?.version.is_at_most(major, minor))
    }

    #[inline]
    pub fn is_extension_supported(&self, name: &str) -> Result<bool, Error> {
        Ok(self.negotiated()?.is_extension_supported(name))
    }

    #[inline]
    pub fn extensions(&self) -> Result<&ExtensionSet, Error> {
        Ok(self.negotiated()?.extensions())
    }

    #[inline]
    pub fn default_framebuffer(&self) -> Result<GLuint, Error> {
        Ok(self.negotiated()?.default_framebuffer)
    }

    #[inline]
    pub fn default_renderbuffer(&self) -> Result<GLuint, Error> {
        Ok(self.negotiated()?.default_renderbuffer)
    }

    /// The functions that were replaced by stubs, with the reason for each.
    pub fn unavailable_functions(&self) -> Result<&[(&'static str, FailureReason)], Error> {
        self.negotiated()?;
        Ok(&self.unavailable)
    }

    /// Reports the first error recorded by the driver, discarding any others.
    ///
    /// This is a debugging aid. In release builds it neither calls `glGetError` nor drains the
    /// queue, so it must not be used to make decisions. Calling it on an uninitialized loader
    /// fails with `Error::NotInitialized` in every build.
    #[inline]
    pub fn check_error(&self) -> Result<(), Error> {
        let gl = self.gl()?;
        if !cfg!(debug_assertions) {
            return Ok(());
        }

        let error = unsafe { gl.GetError() }.to_gl_error();
        version::drain_errors(gl);
        match error {
            None => Ok(()),
            Some(error) => Err(Error::GL(error)),
        }
    }
}

fn binding_name(binding: GLint) -> GLuint {
    binding.max(0) as GLuint
}
