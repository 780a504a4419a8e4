// glbinder/src/tests.rs
//
//! Unit tests, run against a fake driver.

use crate::loader::Negotiated;
use crate::resolver::{self, Resolution};
use crate::types::{GLenum, GLint, GLubyte, GLuint};
use crate::{Error, ExtensionSet, FailureReason, FnInitializer, GLApi, GLError, GLVersion, Gl};
use crate::{Initializer, Loader, LoaderAttributes, LoaderFlags, Requirement, SymbolInfo};
use crate::SymbolStatus;

use std::cell::RefCell;
use std::collections::HashSet;
use std::ffi::CString;
use std::os::raw::c_void;
use std::ptr;

struct FakeDriver {
    version_string: CString,
    /// `None` makes `GL_MAJOR_VERSION` and `GL_MINOR_VERSION` raise `GL_INVALID_ENUM`.
    queried_version: Option<(GLint, GLint)>,
    extensions: Vec<CString>,
    extensions_string: CString,
    /// Entry points that `get_proc_address` returns null for.
    missing: HashSet<&'static str>,
    errors: Vec<GLenum>,
    framebuffer_binding: GLint,
    renderbuffer_binding: GLint,
    requested: Vec<String>,
    flush_count: usize,
}

impl FakeDriver {
    fn new(version_string: &str, queried_version: Option<(GLint, GLint)>) -> FakeDriver {
        FakeDriver {
            version_string: CString::new(version_string).unwrap(),
            queried_version,
            extensions: vec![],
            extensions_string: CString::default(),
            missing: HashSet::new(),
            errors: vec![],
            framebuffer_binding: 0,
            renderbuffer_binding: 0,
            requested: vec![],
            flush_count: 0,
        }
    }

    fn extensions(mut self, extensions: &[&str]) -> FakeDriver {
        self.extensions = extensions.iter().map(|&name| CString::new(name).unwrap()).collect();
        self.extensions_string = CString::new(extensions.join(" ")).unwrap();
        self
    }

    fn missing(mut self, missing: &[&'static str]) -> FakeDriver {
        self.missing.extend(missing.iter().cloned());
        self
    }

    fn install(self) {
        DRIVER.with(|driver| *driver.borrow_mut() = self);
    }
}

thread_local! {
    static DRIVER: RefCell<FakeDriver> = RefCell::new(FakeDriver::new("", None));
}

fn with_driver<F, R>(f: F) -> R
where
    F: FnOnce(&mut FakeDriver) -> R,
{
    DRIVER.with(|driver| f(&mut driver.borrow_mut()))
}

extern "system" fn fake_get_error() -> GLenum {
    with_driver(|driver| {
        if driver.errors.is_empty() {
            glow::NO_ERROR
        } else {
            driver.errors.remove(0)
        }
    })
}

extern "system" fn fake_get_string(name: GLenum) -> *const GLubyte {
    with_driver(|driver| match name {
        glow::VERSION => driver.version_string.as_ptr() as *const GLubyte,
        glow::EXTENSIONS => driver.extensions_string.as_ptr() as *const GLubyte,
        _ => {
            driver.errors.push(glow::INVALID_ENUM);
            ptr::null()
        }
    })
}

extern "system" fn fake_get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
    with_driver(|driver| match driver.extensions.get(index as usize) {
        Some(extension) if name == glow::EXTENSIONS => extension.as_ptr() as *const GLubyte,
        _ => {
            driver.errors.push(glow::INVALID_VALUE);
            ptr::null()
        }
    })
}

extern "system" fn fake_get_integerv(pname: GLenum, data: *mut GLint) {
    let value = with_driver(|driver| {
        let value = match (pname, driver.queried_version) {
            (glow::MAJOR_VERSION, Some((major, _))) => Some(major),
            (glow::MINOR_VERSION, Some((_, minor))) => Some(minor),
            (glow::NUM_EXTENSIONS, Some(_)) => Some(driver.extensions.len() as GLint),
            (glow::DRAW_FRAMEBUFFER_BINDING, _) => Some(driver.framebuffer_binding),
            (glow::RENDERBUFFER_BINDING, _) => Some(driver.renderbuffer_binding),
            _ => None,
        };
        if value.is_none() {
            driver.errors.push(glow::INVALID_ENUM);
        }
        value
    });
    if let Some(value) = value {
        unsafe { *data = value };
    }
}

extern "system" fn fake_flush() {
    with_driver(|driver| driver.flush_count += 1);
}

#[derive(Default)]
struct FakeInitializer {
    prepare_count: usize,
    cleanup_count: usize,
}

impl Initializer for FakeInitializer {
    fn prepare(&mut self) {
        self.prepare_count += 1;
    }

    fn cleanup(&mut self) {
        self.cleanup_count += 1;
    }

    fn get_proc_address(&mut self, symbol_name: &str) -> *const c_void {
        with_driver(|driver| {
            driver.requested.push(symbol_name.to_owned());
            if driver.missing.contains(symbol_name) {
                return ptr::null();
            }
            match symbol_name {
                "glGetError" => fake_get_error as *const c_void,
                "glGetString" => fake_get_string as *const c_void,
                "glGetStringi" => fake_get_stringi as *const c_void,
                "glGetIntegerv" => fake_get_integerv as *const c_void,
                // Every other function is only ever called in tests through `glFlush`.
                _ => fake_flush as *const c_void,
            }
        })
    }
}

fn was_requested(name: &str) -> bool {
    with_driver(|driver| driver.requested.iter().any(|requested| requested == name))
}

fn initialized_loader() -> Loader {
    let mut loader = Loader::default();
    loader.initialize(&mut FakeInitializer::default()).unwrap();
    loader
}

fn statuses(gl: &Gl) -> Vec<Option<SymbolStatus>> {
    Gl::FUNCTIONS.iter().map(|symbol| gl.status(symbol.name)).collect()
}

#[test]
fn test_desktop_version_from_integer_queries() {
    FakeDriver::new("4.5.0 NVIDIA 440.100", Some((4, 5)))
        .extensions(&["GL_ARB_debug_output", "GL_KHR_debug"])
        .install();
    let loader = initialized_loader();

    assert!(loader.is_initialized());
    assert_eq!(loader.is_embedded_profile(), Ok(false));
    assert_eq!(loader.is_emulated(), Ok(false));
    assert_eq!(loader.major_version(), Ok(4));
    assert_eq!(loader.minor_version(), Ok(5));
    assert_eq!(loader.is_version_at_least(4, 0), Ok(true));
    assert_eq!(loader.is_version_at_least(5, 0), Ok(false));
    assert_eq!(loader.is_version_at_most(4, 5), Ok(true));
    assert_eq!(loader.is_version_at_most(4, 4), Ok(false));
    assert_eq!(loader.is_extension_supported("GL_KHR_debug"), Ok(true));
    assert_eq!(loader.is_extension_supported("GL_EXT_foo"), Ok(false));
    assert_eq!(loader.extensions().unwrap().len(), 2);

    // Everything is core at 4.5, so only canonical names are requested.
    let gl = loader.gl().unwrap();
    assert!(gl.is_loaded("glGenVertexArrays"));
    assert!(gl.is_loaded("glDebugMessageCallback"));
    assert!(was_requested("glGenVertexArrays"));
    assert!(!was_requested("glGenVertexArraysOES"));
    assert!(!was_requested("glDebugMessageCallbackARB"));
    // glBufferStorage is core in 4.4.
    assert!(gl.is_loaded("glBufferStorage"));
    assert!(loader.unavailable_functions().unwrap().is_empty());
}

#[test]
fn test_version_string_fallback_when_integer_query_is_unsupported() {
    FakeDriver::new("2.1 Mesa 19.0", None)
        .extensions(&["GL_ARB_vertex_array_object", "GL_EXT_framebuffer_object"])
        .missing(&["glGetStringi"])
        .install();
    let loader = initialized_loader();

    assert_eq!(loader.version(), Ok(GLVersion::new(2, 1)));
    assert_eq!(loader.api(), Ok(GLApi::GL));
    // glGetStringi is missing, so extensions come from the single GL_EXTENSIONS string.
    assert_eq!(loader.is_extension_supported("GL_EXT_framebuffer_object"), Ok(true));

    let gl = loader.gl().unwrap();
    assert_eq!(
        gl.status("glGetStringi"),
        Some(SymbolStatus::Unavailable(FailureReason::DriverReturnedNull {
            extension: None,
            symbol: "glGetStringi",
        }))
    );
    // ARB_vertex_array_object has no alias; EXT_framebuffer_object does.
    assert!(gl.is_loaded("glGenVertexArrays"));
    assert!(was_requested("glGenVertexArrays"));
    assert!(gl.is_loaded("glBindFramebuffer"));
    assert!(was_requested("glBindFramebufferEXT"));
    assert!(!was_requested("glBindFramebuffer"));
    // Buffer objects are core in 1.5.
    assert!(was_requested("glBindBuffer"));
    assert!(!was_requested("glBindBufferARB"));
}

#[test]
fn test_unparseable_version_string_uses_fallback_version() {
    FakeDriver::new("unknown renderer", None).install();
    let loader = initialized_loader();
    assert_eq!(loader.version(), Ok(GLVersion::new(4, 6)));
    assert_eq!(loader.is_emulated(), Ok(false));

    let mut attributes = LoaderAttributes::default();
    attributes.fallback_gl_version = GLVersion::new(3, 3);
    let mut loader = Loader::new(attributes);
    loader.initialize(&mut FakeInitializer::default()).unwrap();
    assert_eq!(loader.version(), Ok(GLVersion::new(3, 3)));
}

#[test]
fn test_emulated_gles_trusts_the_version_string() {
    FakeDriver::new("OpenGL ES 2.0 (ANGLE 2.1.0)", Some((3, 0)))
        .extensions(&["GL_OES_vertex_array_object", "GL_EXT_map_buffer_range"])
        .install();
    let loader = initialized_loader();

    assert_eq!(loader.is_embedded_profile(), Ok(true));
    assert_eq!(loader.is_emulated(), Ok(true));
    assert_eq!(loader.version(), Ok(GLVersion::new(2, 0)));
    // OpenGL ES 2.0 reads GL_EXTENSIONS as one string.
    assert_eq!(loader.is_extension_supported("GL_OES_vertex_array_object"), Ok(true));

    let gl = loader.gl().unwrap();
    assert!(was_requested("glGenVertexArraysOES"));
    assert!(!was_requested("glGenVertexArrays"));
    assert!(gl.is_loaded("glGenVertexArrays"));
    assert!(was_requested("glMapBufferRangeEXT"));
}

#[test]
fn test_emulation_detection_can_be_disabled() {
    FakeDriver::new("OpenGL ES 2.0 (ANGLE 2.1.0)", Some((3, 0))).install();
    let mut attributes = LoaderAttributes::default();
    attributes.flags.remove(LoaderFlags::DETECT_EMULATION);
    let mut loader = Loader::new(attributes);
    loader.initialize(&mut FakeInitializer::default()).unwrap();
    assert_eq!(loader.is_emulated(), Ok(false));
    assert_eq!(loader.version(), Ok(GLVersion::new(3, 0)));
}

#[test]
fn test_gles3_uses_indexed_extensions() {
    FakeDriver::new("OpenGL ES 3.2 Mesa 20.0.8", Some((3, 2)))
        .extensions(&["GL_EXT_buffer_storage"])
        .install();
    let loader = initialized_loader();
    assert_eq!(loader.is_emulated(), Ok(false));
    assert_eq!(loader.is_extension_supported("GL_EXT_buffer_storage"), Ok(true));

    // glBufferStorage is never core on OpenGL ES.
    assert!(loader.gl().unwrap().is_loaded("glBufferStorage"));
    assert!(was_requested("glBufferStorageEXT"));
    assert!(!was_requested("glBufferStorage"));
}

#[test]
fn test_legacy_extension_string_when_extension_count_is_unsupported() {
    // glGetStringi resolves, but the driver rejects GL_NUM_EXTENSIONS.
    FakeDriver::new("3.0 Mesa 10.1", None)
        .extensions(&["GL_ARB_sync", "GL_ARB_vertex_array_object"])
        .install();
    let loader = initialized_loader();

    assert_eq!(loader.version(), Ok(GLVersion::new(3, 0)));
    assert!(loader.gl().unwrap().is_loaded("glGetStringi"));
    assert_eq!(loader.extensions().unwrap().len(), 2);
    assert_eq!(loader.is_extension_supported("GL_ARB_sync"), Ok(true));
    // The rejected count query left no error behind.
    assert!(with_driver(|driver| driver.errors.is_empty()));
}

#[test]
fn test_gles_debug_output_uses_khr_entry_points() {
    FakeDriver::new("OpenGL ES 3.0 Mesa", Some((3, 0)))
        .extensions(&["GL_KHR_debug"])
        .install();
    let loader = initialized_loader();
    let gl = loader.gl().unwrap();

    assert!(gl.is_loaded("glObjectLabel"));
    assert!(gl.is_loaded("glDebugMessageCallback"));
    assert!(was_requested("glObjectLabelKHR"));
    assert!(was_requested("glDebugMessageCallbackKHR"));
    assert!(!was_requested("glObjectLabel"));
    assert!(!was_requested("glDebugMessageCallback"));
}

#[test]
fn test_desktop_debug_output_uses_canonical_entry_points() {
    FakeDriver::new("4.2.0", Some((4, 2)))
        .extensions(&["GL_KHR_debug"])
        .install();
    let loader = initialized_loader();

    assert!(loader.gl().unwrap().is_loaded("glObjectLabel"));
    assert!(was_requested("glObjectLabel"));
    assert!(!was_requested("glObjectLabelKHR"));
}

#[test]
fn test_unsupported_extension_is_one_the_profile_can_provide() {
    FakeDriver::new("OpenGL ES 2.0 Mesa", Some((2, 0))).install();
    let loader = initialized_loader();
    let gl = loader.gl().unwrap();
    assert_eq!(
        gl.status("glDrawArraysInstanced"),
        Some(SymbolStatus::Unavailable(FailureReason::ExtensionUnsupported {
            extension: "GL_ANGLE_instanced_arrays",
        }))
    );
    assert_eq!(
        gl.status("glObjectLabel"),
        Some(SymbolStatus::Unavailable(FailureReason::ExtensionUnsupported {
            extension: "GL_KHR_debug",
        }))
    );

    FakeDriver::new("2.1 Mesa", None).install();
    let loader = initialized_loader();
    assert_eq!(
        loader.gl().unwrap().status("glDrawArraysInstanced"),
        Some(SymbolStatus::Unavailable(FailureReason::ExtensionUnsupported {
            extension: "GL_ARB_draw_instanced",
        }))
    );
}

#[test]
fn test_unsupported_extension_installs_stub_without_lookup() {
    FakeDriver::new("3.3.0 Core", Some((3, 3))).install();
    let loader = initialized_loader();
    let gl = loader.gl().unwrap();

    let reason = FailureReason::ExtensionUnsupported { extension: "GL_KHR_debug" };
    assert_eq!(gl.status("glObjectLabel"), Some(SymbolStatus::Unavailable(reason)));
    assert!(!was_requested("glObjectLabel"));
    assert!(loader.unavailable_functions().unwrap().contains(&("glObjectLabel", reason)));
}

#[test]
#[should_panic(expected = "GL_KHR_debug")]
fn test_calling_a_function_without_its_extension_panics() {
    FakeDriver::new("3.3.0 Core", Some((3, 3))).install();
    let loader = initialized_loader();
    unsafe {
        loader.gl().unwrap().ObjectLabel(glow::BUFFER, 1, 0, ptr::null());
    }
}

#[test]
fn test_missing_entry_point_for_supported_extension() {
    FakeDriver::new("OpenGL ES 2.0 Mesa", Some((2, 0)))
        .extensions(&["GL_OES_vertex_array_object"])
        .missing(&["glGenVertexArraysOES"])
        .install();
    let loader = initialized_loader();
    let gl = loader.gl().unwrap();

    assert_eq!(
        gl.status("glGenVertexArrays"),
        Some(SymbolStatus::Unavailable(FailureReason::DriverReturnedNull {
            extension: Some("GL_OES_vertex_array_object"),
            symbol: "glGenVertexArraysOES",
        }))
    );
    // The siblings are still bound.
    assert!(gl.is_loaded("glBindVertexArray"));
}

#[test]
#[should_panic(expected = "GL_OES_vertex_array_object is supported by the driver, but it returned \
                           no entry point for glGenVertexArraysOES")]
fn test_calling_a_function_missing_from_the_driver_panics() {
    FakeDriver::new("OpenGL ES 2.0 Mesa", Some((2, 0)))
        .extensions(&["GL_OES_vertex_array_object"])
        .missing(&["glGenVertexArraysOES"])
        .install();
    let loader = initialized_loader();
    let mut vertex_array = 0;
    unsafe {
        loader.gl().unwrap().GenVertexArrays(1, &mut vertex_array);
    }
}

#[test]
fn test_missing_core_function_names_only_the_symbol() {
    FakeDriver::new("4.6.0", Some((4, 6))).missing(&["glFinish"]).install();
    let loader = initialized_loader();
    let reason = FailureReason::DriverReturnedNull { extension: None, symbol: "glFinish" };
    assert_eq!(loader.gl().unwrap().status("glFinish"), Some(SymbolStatus::Unavailable(reason)));
    assert_eq!(reason.to_string(), "the driver returned no entry point for glFinish");
}

#[test]
fn test_bound_functions_call_into_the_driver() {
    FakeDriver::new("4.6.0", Some((4, 6))).install();
    let loader = initialized_loader();
    unsafe {
        loader.gl().unwrap().Flush();
        loader.gl().unwrap().Flush();
    }
    assert_eq!(with_driver(|driver| driver.flush_count), 2);
}

#[test]
fn test_queries_require_initialization() {
    let loader = Loader::default();
    assert!(!loader.is_initialized());
    assert_eq!(loader.major_version(), Err(Error::NotInitialized));
    assert_eq!(loader.minor_version(), Err(Error::NotInitialized));
    assert_eq!(loader.is_embedded_profile(), Err(Error::NotInitialized));
    assert_eq!(loader.is_emulated(), Err(Error::NotInitialized));
    assert_eq!(loader.is_version_at_least(2, 0), Err(Error::NotInitialized));
    assert_eq!(loader.is_version_at_most(2, 0), Err(Error::NotInitialized));
    assert_eq!(loader.is_extension_supported("GL_KHR_debug"), Err(Error::NotInitialized));
    assert_eq!(loader.default_framebuffer(), Err(Error::NotInitialized));
    assert_eq!(loader.check_error(), Err(Error::NotInitialized));
    assert!(loader.gl().is_err());
    assert!(loader.unavailable_functions().is_err());
}

#[test]
fn test_lifecycle_transitions() {
    FakeDriver::new("4.6.0", Some((4, 6))).install();
    let mut loader = Loader::default();
    let mut initializer = FakeInitializer::default();

    assert_eq!(loader.uninitialize(), Err(Error::NotInitialized));
    loader.initialize(&mut initializer).unwrap();
    assert_eq!(loader.initialize(&mut initializer), Err(Error::AlreadyInitialized));
    // The rejected call doesn't touch the initializer.
    assert_eq!((initializer.prepare_count, initializer.cleanup_count), (1, 1));

    loader.uninitialize().unwrap();
    assert!(!loader.is_initialized());
    assert_eq!(loader.uninitialize(), Err(Error::NotInitialized));
    assert_eq!(loader.major_version(), Err(Error::NotInitialized));
}

#[test]
fn test_reinitialization_reproduces_negotiation() {
    FakeDriver::new("OpenGL ES 3.0 Mesa", Some((3, 0)))
        .extensions(&["GL_EXT_texture_storage", "GL_KHR_debug"])
        .missing(&["glReadBuffer", "glObjectLabelKHR"])
        .install();
    let mut loader = Loader::default();
    let mut initializer = FakeInitializer::default();

    loader.initialize(&mut initializer).unwrap();
    let negotiated: Negotiated = loader.negotiated().unwrap().clone();
    let first_statuses = statuses(loader.gl().unwrap());
    let first_unavailable = loader.unavailable_functions().unwrap().to_vec();
    assert!(!first_unavailable.is_empty());

    loader.uninitialize().unwrap();
    loader.initialize(&mut initializer).unwrap();
    assert_eq!(loader.negotiated().unwrap(), &negotiated);
    assert_eq!(statuses(loader.gl().unwrap()), first_statuses);
    assert_eq!(loader.unavailable_functions().unwrap(), &first_unavailable[..]);
}

#[test]
fn test_slots_are_cleared_by_uninitialize() {
    FakeDriver::new("4.6.0", Some((4, 6))).install();
    let mut loader = initialized_loader();
    loader.uninitialize().unwrap();
    // Reach past the state check to look at the table itself.
    assert_eq!(loader.gl.status("glFlush"), Some(SymbolStatus::Unresolved));
    assert_eq!(loader.gl.status("glGetError"), Some(SymbolStatus::Unresolved));
    assert_eq!(loader.gl.status("glNotAFunction"), None);
}

#[test]
fn test_missing_bootstrap_function_fails_and_rolls_back() {
    FakeDriver::new("4.6.0", Some((4, 6))).missing(&["glGetString"]).install();
    let mut loader = Loader::default();
    let mut initializer = FakeInitializer::default();

    assert_eq!(
        loader.initialize(&mut initializer),
        Err(Error::BootstrapFunctionNotFound("glGetString"))
    );
    assert!(!loader.is_initialized());
    assert_eq!((initializer.prepare_count, initializer.cleanup_count), (1, 1));
    assert_eq!(loader.gl.status("glGetError"), Some(SymbolStatus::Unresolved));

    with_driver(|driver| driver.missing.clear());
    loader.initialize(&mut initializer).unwrap();
    assert_eq!(loader.version(), Ok(GLVersion::new(4, 6)));
}

#[test]
fn test_default_bindings_are_captured() {
    let mut driver = FakeDriver::new("OpenGL ES 3.0 Apple", Some((3, 0)));
    driver.framebuffer_binding = 3;
    driver.renderbuffer_binding = 7;
    driver.install();
    let loader = initialized_loader();
    assert_eq!(loader.default_framebuffer(), Ok(3));
    assert_eq!(loader.default_renderbuffer(), Ok(7));

    let mut loader = Loader::new(LoaderAttributes {
        flags: LoaderFlags::DETECT_EMULATION,
        ..LoaderAttributes::default()
    });
    loader.initialize(&mut FakeInitializer::default()).unwrap();
    assert_eq!(loader.default_framebuffer(), Ok(0));
}

#[cfg(debug_assertions)]
#[test]
fn test_check_error_translates_driver_errors() {
    FakeDriver::new("4.6.0", Some((4, 6))).install();
    let loader = initialized_loader();
    assert_eq!(loader.check_error(), Ok(()));

    with_driver(|driver| driver.errors.extend(&[glow::INVALID_OPERATION, glow::OUT_OF_MEMORY]));
    assert_eq!(loader.check_error(), Err(Error::GL(GLError::InvalidOperation)));
    // The rest of the queue is discarded.
    assert_eq!(loader.check_error(), Ok(()));

    with_driver(|driver| driver.errors.push(0x1234));
    assert_eq!(loader.check_error(), Err(Error::GL(GLError::Unknown(0x1234))));
}

#[cfg(not(debug_assertions))]
#[test]
fn test_check_error_does_nothing_in_release_builds() {
    FakeDriver::new("4.6.0", Some((4, 6))).install();
    let loader = initialized_loader();
    with_driver(|driver| driver.errors.push(glow::INVALID_OPERATION));
    assert_eq!(loader.check_error(), Ok(()));
    // The error is left for the caller to observe.
    assert_eq!(with_driver(|driver| driver.errors.clone()), [glow::INVALID_OPERATION]);
    assert_eq!(Loader::default().check_error(), Err(Error::NotInitialized));
}

#[test]
fn test_stale_errors_do_not_break_version_detection() {
    let mut driver = FakeDriver::new("4.1 Metal", Some((4, 1)));
    driver.errors = vec![glow::INVALID_VALUE, glow::INVALID_OPERATION];
    driver.install();
    let loader = initialized_loader();
    assert_eq!(loader.version(), Ok(GLVersion::new(4, 1)));
}

fn negotiated(version: GLVersion, api: GLApi, extensions: &[&str]) -> Negotiated {
    Negotiated {
        version,
        api,
        extensions: extensions.iter().map(|&name| name.to_owned()).collect::<ExtensionSet>(),
        ..Negotiated::default()
    }
}

fn resolve_recording(symbol: &SymbolInfo, negotiated: &Negotiated) -> (Resolution, Vec<String>) {
    let mut requested = vec![];
    let resolution = resolver::resolve(
        &mut FnInitializer(|name: &str| {
            requested.push(name.to_owned());
            fake_flush as *const c_void
        }),
        symbol,
        negotiated,
    );
    (resolution, requested)
}

static CONJUNCTION: SymbolInfo = SymbolInfo {
    name: "glFoo",
    requirements: &[Requirement::new().gl(9, 0).extension("GL_EXT_a && GL_EXT_b")],
};

#[test]
fn test_conjunctions_require_every_extension() {
    let version = GLVersion::new(4, 6);

    let (resolution, requested) =
        resolve_recording(&CONJUNCTION, &negotiated(version, GLApi::GL, &[]));
    assert_eq!(
        resolution,
        Resolution::Stubbed(FailureReason::ExtensionUnsupported { extension: "GL_EXT_a" })
    );
    assert!(requested.is_empty());

    let (resolution, requested) =
        resolve_recording(&CONJUNCTION, &negotiated(version, GLApi::GL, &["GL_EXT_a"]));
    assert_eq!(
        resolution,
        Resolution::Stubbed(FailureReason::ExtensionUnsupported { extension: "GL_EXT_b" })
    );
    assert!(requested.is_empty());

    let (resolution, requested) = resolve_recording(
        &CONJUNCTION,
        &negotiated(version, GLApi::GL, &["GL_EXT_b", "GL_EXT_a"]),
    );
    assert!(matches!(resolution, Resolution::Bound(_)));
    assert_eq!(requested, ["glFoo"]);

    // At 9.0 the function is core and the extensions don't matter.
    let (resolution, requested) =
        resolve_recording(&CONJUNCTION, &negotiated(GLVersion::new(9, 0), GLApi::GL, &[]));
    assert!(matches!(resolution, Resolution::Bound(_)));
    assert_eq!(requested, ["glFoo"]);
}

static STACKED: SymbolInfo = SymbolInfo {
    name: "glBar",
    requirements: &[
        Requirement::new().gl(3, 0).gles(3, 0).extension("GL_ARB_bar"),
        Requirement::new().extension("GL_OES_bar").entry_point("glBarOES"),
        Requirement::new().extension("GL_APPLE_bar").entry_point("glBarAPPLE"),
    ],
};

#[test]
fn test_stacked_requirements_use_the_last_satisfied_alias() {
    let version = GLVersion::new(2, 0);

    let (_, requested) =
        resolve_recording(&STACKED, &negotiated(version, GLApi::GLES, &["GL_OES_bar"]));
    assert_eq!(requested, ["glBarOES"]);

    let (_, requested) = resolve_recording(
        &STACKED,
        &negotiated(version, GLApi::GLES, &["GL_OES_bar", "GL_APPLE_bar"]),
    );
    assert_eq!(requested, ["glBarAPPLE"]);

    let (_, requested) = resolve_recording(
        &STACKED,
        &negotiated(GLVersion::new(2, 1), GLApi::GL, &["GL_ARB_bar"]),
    );
    assert_eq!(requested, ["glBar"]);

    // With nothing satisfied, the first requirement's extension is reported.
    let (resolution, requested) =
        resolve_recording(&STACKED, &negotiated(version, GLApi::GLES, &[]));
    assert_eq!(
        resolution,
        Resolution::Stubbed(FailureReason::ExtensionUnsupported { extension: "GL_ARB_bar" })
    );
    assert!(requested.is_empty());
}

#[test]
fn test_null_pointer_is_not_found() {
    let mut initializer = FnInitializer(|_: &str| -> *const c_void { ptr::null() });
    let negotiated = negotiated(GLVersion::new(2, 0), GLApi::GLES, &["GL_OES_bar"]);
    assert_eq!(
        resolver::resolve(&mut initializer, &STACKED, &negotiated),
        Resolution::Stubbed(FailureReason::DriverReturnedNull {
            extension: Some("GL_OES_bar"),
            symbol: "glBarOES",
        })
    );
    assert_eq!(
        resolver::lookup(&mut initializer, &Gl::BOOTSTRAP[0]),
        Resolution::Stubbed(FailureReason::DriverReturnedNull {
            extension: None,
            symbol: "glGetError",
        })
    );
}

#[test]
fn test_function_table_is_well_formed() {
    let mut names = HashSet::new();
    for symbol in Gl::BOOTSTRAP.iter().chain(Gl::FUNCTIONS) {
        assert!(symbol.name.starts_with("gl"), "{}", symbol.name);
        assert!(names.insert(symbol.name), "{} is declared twice", symbol.name);
        for requirement in symbol.requirements {
            assert!(
                requirement.gl.is_some()
                    || requirement.gles.is_some()
                    || requirement.extension.is_some(),
                "{} has an empty requirement",
                symbol.name
            );
            if requirement.entry_point.is_some() {
                assert!(
                    requirement.extension.is_some(),
                    "{} aliases without an extension",
                    symbol.name
                );
            }
        }
    }
    assert_eq!(Gl::BOOTSTRAP.len(), 4);
}
