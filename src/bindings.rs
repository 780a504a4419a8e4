// glbinder/src/bindings.rs
//
//! The table of bindable OpenGL functions.

use crate::info::GLApi;
use crate::requirement::Requirement;
use crate::types::*;

use std::os::raw::c_void;

const fn gl(major: u8, minor: u8) -> Requirement {
    Requirement::new().gl(major, minor)
}

const fn ext(extension: &'static str) -> Requirement {
    Requirement::new().extension(extension)
}

/// An extension that only desktop drivers expose.
const fn gl_ext(extension: &'static str) -> Requirement {
    ext(extension).api(GLApi::GL)
}

/// An extension that only OpenGL ES drivers expose.
const fn gles_ext(extension: &'static str) -> Requirement {
    ext(extension).api(GLApi::GLES)
}

gl_functions! {
    bootstrap {
        fn GetError() -> GLenum;
        fn GetString(name: GLenum) -> *const GLubyte;
        fn GetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
        fn GetIntegerv(pname: GLenum, data: *mut GLint) -> ();
    }

    // Available in every version of both APIs.
    [] fn ActiveTexture(texture: GLenum) -> ();
    [] fn BindTexture(target: GLenum, texture: GLuint) -> ();
    [] fn BlendFunc(sfactor: GLenum, dfactor: GLenum) -> ();
    [] fn Clear(mask: GLbitfield) -> ();
    [] fn ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) -> ();
    [] fn DeleteTextures(n: GLsizei, textures: *const GLuint) -> ();
    [] fn Disable(cap: GLenum) -> ();
    [] fn DrawArrays(mode: GLenum, first: GLint, count: GLsizei) -> ();
    [] fn DrawElements(mode: GLenum, count: GLsizei, kind: GLenum, indices: *const c_void) -> ();
    [] fn Enable(cap: GLenum) -> ();
    [] fn Finish() -> ();
    [] fn Flush() -> ();
    [] fn GenTextures(n: GLsizei, textures: *mut GLuint) -> ();
    [] fn GetBooleanv(pname: GLenum, data: *mut GLboolean) -> ();
    [] fn GetFloatv(pname: GLenum, data: *mut GLfloat) -> ();
    [] fn IsEnabled(cap: GLenum) -> GLboolean;
    [] fn PixelStorei(pname: GLenum, param: GLint) -> ();
    [] fn ReadPixels(
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        kind: GLenum,
        pixels: *mut c_void
    ) -> ();
    [] fn Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> ();
    [] fn TexImage2D(
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        kind: GLenum,
        pixels: *const c_void
    ) -> ();
    [] fn TexParameteri(target: GLenum, pname: GLenum, param: GLint) -> ();
    [] fn TexSubImage2D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        kind: GLenum,
        pixels: *const c_void
    ) -> ();
    [] fn Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> ();

    // Buffer objects.
    [gl(1, 5).gles(2, 0), gl_ext("GL_ARB_vertex_buffer_object").entry_point("glBindBufferARB")]
    fn BindBuffer(target: GLenum, buffer: GLuint) -> ();
    [gl(1, 5).gles(2, 0), gl_ext("GL_ARB_vertex_buffer_object").entry_point("glBufferDataARB")]
    fn BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) -> ();
    [gl(1, 5).gles(2, 0), gl_ext("GL_ARB_vertex_buffer_object").entry_point("glBufferSubDataARB")]
    fn BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void)
        -> ();
    [gl(1, 5).gles(2, 0), gl_ext("GL_ARB_vertex_buffer_object").entry_point("glDeleteBuffersARB")]
    fn DeleteBuffers(n: GLsizei, buffers: *const GLuint) -> ();
    [gl(1, 5).gles(2, 0), gl_ext("GL_ARB_vertex_buffer_object").entry_point("glGenBuffersARB")]
    fn GenBuffers(n: GLsizei, buffers: *mut GLuint) -> ();

    // Shaders and programs.
    [gl(2, 0).gles(2, 0)] fn AttachShader(program: GLuint, shader: GLuint) -> ();
    [gl(2, 0).gles(2, 0)]
    fn BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar) -> ();
    [gl(2, 0).gles(2, 0)] fn CompileShader(shader: GLuint) -> ();
    [gl(2, 0).gles(2, 0)] fn CreateProgram() -> GLuint;
    [gl(2, 0).gles(2, 0)] fn CreateShader(kind: GLenum) -> GLuint;
    [gl(2, 0).gles(2, 0)] fn DeleteProgram(program: GLuint) -> ();
    [gl(2, 0).gles(2, 0)] fn DeleteShader(shader: GLuint) -> ();
    [gl(2, 0).gles(2, 0)] fn DisableVertexAttribArray(index: GLuint) -> ();
    [gl(2, 0).gles(2, 0)] fn EnableVertexAttribArray(index: GLuint) -> ();
    [gl(2, 0).gles(2, 0)]
    fn GetProgramInfoLog(
        program: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        info_log: *mut GLchar
    ) -> ();
    [gl(2, 0).gles(2, 0)] fn GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint) -> ();
    [gl(2, 0).gles(2, 0)]
    fn GetShaderInfoLog(
        shader: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        info_log: *mut GLchar
    ) -> ();
    [gl(2, 0).gles(2, 0)] fn GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) -> ();
    [gl(2, 0).gles(2, 0)] fn GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
    [gl(2, 0).gles(2, 0)] fn LinkProgram(program: GLuint) -> ();
    [gl(2, 0).gles(2, 0)]
    fn ShaderSource(
        shader: GLuint,
        count: GLsizei,
        string: *const *const GLchar,
        length: *const GLint
    ) -> ();
    [gl(2, 0).gles(2, 0)] fn Uniform1i(location: GLint, v0: GLint) -> ();
    [gl(2, 0).gles(2, 0)]
    fn Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) -> ();
    [gl(2, 0).gles(2, 0)]
    fn UniformMatrix4fv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat
    ) -> ();
    [gl(2, 0).gles(2, 0)] fn UseProgram(program: GLuint) -> ();
    [gl(2, 0).gles(2, 0)]
    fn VertexAttribPointer(
        index: GLuint,
        size: GLint,
        kind: GLenum,
        normalized: GLboolean,
        stride: GLsizei,
        pointer: *const c_void
    ) -> ();

    // Framebuffer objects.
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glBindFramebufferEXT")
    ]
    fn BindFramebuffer(target: GLenum, framebuffer: GLuint) -> ();
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glBindRenderbufferEXT")
    ]
    fn BindRenderbuffer(target: GLenum, renderbuffer: GLuint) -> ();
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glCheckFramebufferStatusEXT")
    ]
    fn CheckFramebufferStatus(target: GLenum) -> GLenum;
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glDeleteFramebuffersEXT")
    ]
    fn DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint) -> ();
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glDeleteRenderbuffersEXT")
    ]
    fn DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint) -> ();
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glFramebufferRenderbufferEXT")
    ]
    fn FramebufferRenderbuffer(
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint
    ) -> ();
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glFramebufferTexture2DEXT")
    ]
    fn FramebufferTexture2D(
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint
    ) -> ();
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glGenFramebuffersEXT")
    ]
    fn GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint) -> ();
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glGenRenderbuffersEXT")
    ]
    fn GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint) -> ();
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glGenerateMipmapEXT")
    ]
    fn GenerateMipmap(target: GLenum) -> ();
    [
        gl(3, 0).gles(2, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object").entry_point("glRenderbufferStorageEXT")
    ]
    fn RenderbufferStorage(
        target: GLenum,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei
    ) -> ();
    [
        gl(3, 0).gles(3, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_blit").entry_point("glBlitFramebufferEXT"),
        ext("GL_ANGLE_framebuffer_blit").entry_point("glBlitFramebufferANGLE")
    ]
    fn BlitFramebuffer(
        src_x0: GLint,
        src_y0: GLint,
        src_x1: GLint,
        src_y1: GLint,
        dst_x0: GLint,
        dst_y0: GLint,
        dst_x1: GLint,
        dst_y1: GLint,
        mask: GLbitfield,
        filter: GLenum
    ) -> ();
    [
        gl(3, 0).gles(3, 0),
        gl_ext("GL_ARB_framebuffer_object"),
        ext("GL_EXT_framebuffer_object && GL_EXT_framebuffer_multisample")
            .entry_point("glRenderbufferStorageMultisampleEXT"),
        ext("GL_ANGLE_framebuffer_multisample")
            .entry_point("glRenderbufferStorageMultisampleANGLE")
    ]
    fn RenderbufferStorageMultisample(
        target: GLenum,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei
    ) -> ();
    [gl(2, 0).gles(3, 0), ext("GL_EXT_draw_buffers").entry_point("glDrawBuffersEXT")]
    fn DrawBuffers(n: GLsizei, bufs: *const GLenum) -> ();
    [gl(3, 0).gles(3, 0), ext("GL_NV_read_buffer").entry_point("glReadBufferNV")]
    fn ReadBuffer(src: GLenum) -> ();

    // Vertex array objects.
    [
        gl(3, 0).gles(3, 0),
        gl_ext("GL_ARB_vertex_array_object"),
        ext("GL_OES_vertex_array_object").entry_point("glBindVertexArrayOES"),
        ext("GL_APPLE_vertex_array_object").entry_point("glBindVertexArrayAPPLE")
    ]
    fn BindVertexArray(array: GLuint) -> ();
    [
        gl(3, 0).gles(3, 0),
        gl_ext("GL_ARB_vertex_array_object"),
        ext("GL_OES_vertex_array_object").entry_point("glDeleteVertexArraysOES"),
        ext("GL_APPLE_vertex_array_object").entry_point("glDeleteVertexArraysAPPLE")
    ]
    fn DeleteVertexArrays(n: GLsizei, arrays: *const GLuint) -> ();
    [
        gl(3, 0).gles(3, 0),
        gl_ext("GL_ARB_vertex_array_object"),
        ext("GL_OES_vertex_array_object").entry_point("glGenVertexArraysOES"),
        ext("GL_APPLE_vertex_array_object").entry_point("glGenVertexArraysAPPLE")
    ]
    fn GenVertexArrays(n: GLsizei, arrays: *mut GLuint) -> ();

    // Instancing.
    [
        gl(3, 1).gles(3, 0),
        gl_ext("GL_ARB_draw_instanced").entry_point("glDrawArraysInstancedARB"),
        ext("GL_ANGLE_instanced_arrays").entry_point("glDrawArraysInstancedANGLE")
    ]
    fn DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei)
        -> ();
    [
        gl(3, 1).gles(3, 0),
        gl_ext("GL_ARB_draw_instanced").entry_point("glDrawElementsInstancedARB"),
        ext("GL_ANGLE_instanced_arrays").entry_point("glDrawElementsInstancedANGLE")
    ]
    fn DrawElementsInstanced(
        mode: GLenum,
        count: GLsizei,
        kind: GLenum,
        indices: *const c_void,
        instancecount: GLsizei
    ) -> ();
    [
        gl(3, 3).gles(3, 0),
        gl_ext("GL_ARB_instanced_arrays").entry_point("glVertexAttribDivisorARB"),
        ext("GL_ANGLE_instanced_arrays").entry_point("glVertexAttribDivisorANGLE")
    ]
    fn VertexAttribDivisor(index: GLuint, divisor: GLuint) -> ();

    // Buffer mapping and storage.
    [
        gl(3, 0).gles(3, 0),
        gl_ext("GL_ARB_map_buffer_range"),
        ext("GL_EXT_map_buffer_range").entry_point("glMapBufferRangeEXT")
    ]
    fn MapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield)
        -> *mut c_void;
    [gl(1, 5).gles(3, 0), ext("GL_OES_mapbuffer").entry_point("glUnmapBufferOES")]
    fn UnmapBuffer(target: GLenum) -> GLboolean;
    [
        gl(4, 4),
        gl_ext("GL_ARB_buffer_storage"),
        ext("GL_EXT_buffer_storage").entry_point("glBufferStorageEXT")
    ]
    fn BufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield)
        -> ();

    // Textures.
    [
        gl(4, 2).gles(3, 0),
        gl_ext("GL_ARB_texture_storage"),
        ext("GL_EXT_texture_storage").entry_point("glTexStorage2DEXT")
    ]
    fn TexStorage2D(
        target: GLenum,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei
    ) -> ();
    [gl(1, 2).gles(3, 0), ext("GL_OES_texture_3D").entry_point("glTexImage3DOES")]
    fn TexImage3D(
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        border: GLint,
        format: GLenum,
        kind: GLenum,
        pixels: *const c_void
    ) -> ();
    [gl(4, 2).gles(3, 0), gl_ext("GL_ARB_internalformat_query")]
    fn GetInternalformativ(
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        count: GLsizei,
        params: *mut GLint
    ) -> ();

    // Sync objects.
    [
        gl(3, 2).gles(3, 0),
        gl_ext("GL_ARB_sync"),
        ext("GL_APPLE_sync").entry_point("glFenceSyncAPPLE")
    ]
    fn FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync;
    [
        gl(3, 2).gles(3, 0),
        gl_ext("GL_ARB_sync"),
        ext("GL_APPLE_sync").entry_point("glClientWaitSyncAPPLE")
    ]
    fn ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
    [
        gl(3, 2).gles(3, 0),
        gl_ext("GL_ARB_sync"),
        ext("GL_APPLE_sync").entry_point("glDeleteSyncAPPLE")
    ]
    fn DeleteSync(sync: GLsync) -> ();

    // Debug output.
    [
        gl(4, 3).gles(3, 2),
        gl_ext("GL_KHR_debug"),
        gl_ext("GL_ARB_debug_output").entry_point("glDebugMessageCallbackARB"),
        gles_ext("GL_KHR_debug").entry_point("glDebugMessageCallbackKHR")
    ]
    fn DebugMessageCallback(callback: GLDEBUGPROC, user_param: *const c_void) -> ();
    [
        gl(4, 3).gles(3, 2),
        gl_ext("GL_KHR_debug"),
        gl_ext("GL_ARB_debug_output").entry_point("glDebugMessageControlARB"),
        gles_ext("GL_KHR_debug").entry_point("glDebugMessageControlKHR")
    ]
    fn DebugMessageControl(
        source: GLenum,
        kind: GLenum,
        severity: GLenum,
        count: GLsizei,
        ids: *const GLuint,
        enabled: GLboolean
    ) -> ();
    [
        gl(4, 3).gles(3, 2),
        gl_ext("GL_KHR_debug"),
        gles_ext("GL_KHR_debug").entry_point("glObjectLabelKHR")
    ]
    fn ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar) -> ();
}
