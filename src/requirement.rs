// glbinder/src/requirement.rs
//
//! What a function needs from the driver before it can be loaded.

use crate::info::{GLApi, GLVersion};

use std::str::Split;

/// Separates the extensions of a conjunction, as in `"GL_EXT_a && GL_EXT_b"`.
const CONJUNCTION: &str = "&&";

/// The minimum versions, extensions, and alternate entry point of a bindable function.
///
/// A function may carry several requirements when it was promoted across several revisions, e.g.
/// core in OpenGL 3.0, available through `GL_ARB_vertex_array_object` on older desktop drivers, and
/// through `GL_OES_vertex_array_object` under a different name on OpenGL ES 2.0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Requirement {
    /// The first desktop OpenGL version in which the function is core.
    pub gl: Option<GLVersion>,
    /// The first OpenGL ES version in which the function is core.
    pub gles: Option<GLVersion>,
    /// The extension, or `&&`-separated extensions, that expose the function otherwise.
    pub extension: Option<&'static str>,
    /// The name the function goes by when loaded through `extension`.
    pub entry_point: Option<&'static str>,
    /// Restricts the requirement to one API, for extensions only one of them defines.
    pub api: Option<GLApi>,
}

impl Requirement {
    #[inline]
    pub const fn new() -> Requirement {
        Requirement { gl: None, gles: None, extension: None, entry_point: None, api: None }
    }

    #[inline]
    pub const fn gl(mut self, major: u8, minor: u8) -> Requirement {
        self.gl = Some(GLVersion::new(major, minor));
        self
    }

    #[inline]
    pub const fn gles(mut self, major: u8, minor: u8) -> Requirement {
        self.gles = Some(GLVersion::new(major, minor));
        self
    }

    #[inline]
    pub const fn extension(mut self, extension: &'static str) -> Requirement {
        self.extension = Some(extension);
        self
    }

    #[inline]
    pub const fn entry_point(mut self, entry_point: &'static str) -> Requirement {
        self.entry_point = Some(entry_point);
        self
    }

    #[inline]
    pub const fn api(mut self, api: GLApi) -> Requirement {
        self.api = Some(api);
        self
    }

    /// Returns false if the requirement is restricted to the other API.
    #[inline]
    pub fn applies_to(&self, api: GLApi) -> bool {
        self.api.map_or(true, |only| only == api)
    }

    /// Returns true if the function is part of the core API at `version` of `api`.
    ///
    /// A requirement that records no minimum for `api` is never core under it.
    pub fn is_core(&self, version: GLVersion, api: GLApi) -> bool {
        if !self.applies_to(api) {
            return false;
        }
        let minimum = match api {
            GLApi::GL => self.gl,
            GLApi::GLES => self.gles,
        };
        match minimum {
            Some(minimum) => version.is_at_least(minimum.major as u32, minimum.minor as u32),
            None => false,
        }
    }

    /// The individual extension names of this requirement, trimmed.
    pub fn extensions(&self) -> Extensions {
        Extensions { split: self.extension.map(|extension| extension.split(CONJUNCTION)) }
    }
}

/// Iterator over the extension names of a `Requirement`.
pub struct Extensions {
    split: Option<Split<'static, &'static str>>,
}

impl Iterator for Extensions {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        let split = self.split.as_mut()?;
        loop {
            let name = split.next()?.trim();
            if !name.is_empty() {
                return Some(name);
            }
        }
    }
}

/// Static description of one bindable function.
#[derive(Clone, Copy, Debug)]
pub struct SymbolInfo {
    /// The canonical (core) name, e.g. `glGenVertexArrays`.
    pub name: &'static str,
    /// Empty for functions that every context provides.
    pub requirements: &'static [Requirement],
}

impl SymbolInfo {
    /// Returns true if the function can be loaded under its canonical name without extensions.
    pub fn is_core(&self, version: GLVersion, api: GLApi) -> bool {
        is_core(self.requirements, version, api)
    }
}

/// Returns true if no requirement is recorded, or if any of them is core at `version` of `api`.
pub(crate) fn is_core(requirements: &[Requirement], version: GLVersion, api: GLApi) -> bool {
    requirements.is_empty()
        || requirements.iter().any(|requirement| requirement.is_core(version, api))
}
