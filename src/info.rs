// glbinder/src/info.rs
//
//! OpenGL information.

/// The API (OpenGL or OpenGL ES).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GLApi {
    /// OpenGL (full or desktop OpenGL).
    GL,
    /// OpenGL ES (embedded OpenGL).
    GLES,
}

/// An OpenGL or OpenGL ES version.
///
/// Since OpenGL and OpenGL ES have different version numbering schemes, a version is only
/// meaningful together with a `GLApi`.
///
/// Versions are ordered by major version first, then by minor version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GLVersion {
    /// The major OpenGL version (e.g. 4 in 4.2).
    pub major: u8,
    /// The minor OpenGL version (e.g. 2 in 4.2).
    pub minor: u8,
}

/// Prefixes that `GL_VERSION` strings carry on OpenGL ES, longest first.
const GLES_VERSION_PREFIXES: [&str; 3] = ["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "];

/// What every OpenGL ES `GL_VERSION` string starts with.
pub(crate) const GLES_VERSION_MARKER: &str = "OpenGL ES";

impl GLVersion {
    /// Creates a GL version structure with the given major and minor version numbers.
    #[inline]
    pub const fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Parses the version out of a `GL_VERSION` string.
    ///
    /// Desktop strings look like `"4.5.0 NVIDIA 440.100"`; OpenGL ES strings look like
    /// `"OpenGL ES 3.2 Mesa 20.0"`. Returns `None` if no `major.minor` pair can be found where the
    /// profile says it should be.
    pub fn parse(version_string: &str, api: GLApi) -> Option<GLVersion> {
        let mut version_string = version_string.trim_start();
        if api == GLApi::GLES {
            version_string = GLES_VERSION_PREFIXES
                .iter()
                .find_map(|prefix| version_string.strip_prefix(prefix))?
                .trim_start();
        }

        let mut version_string_iter = version_string.split(|c| c == '.' || c == ' ');
        let major = version_string_iter.next()?.parse().ok()?;
        let minor = version_string_iter.next()?.parse().ok()?;
        Some(GLVersion { major, minor })
    }

    /// Returns true if this version is `major.minor` or newer.
    #[inline]
    pub fn is_at_least(self, major: u32, minor: u32) -> bool {
        let this_major = self.major as u32;
        this_major > major || (this_major == major && self.minor as u32 >= minor)
    }

    /// Returns true if this version is `major.minor` or older.
    #[inline]
    pub fn is_at_most(self, major: u32, minor: u32) -> bool {
        let this_major = self.major as u32;
        this_major < major || (this_major == major && self.minor as u32 <= minor)
    }
}
