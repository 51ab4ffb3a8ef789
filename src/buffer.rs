//! Vertex buffers, index buffers and the vertex array that ties them to
//! shader input locations. Every handle is deleted when its owner drops.

use std::{mem, rc::Rc};

use bytemuck::Pod;
use glow::HasContext;

use crate::{Error, Result};

/// A float vertex attribute bound to a shader input location.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub location: u32,
    pub components: i32,
}

impl Attribute {
    pub const fn vec3(location: u32) -> Attribute {
        Attribute {
            location,
            components: 3,
        }
    }
}

pub struct VertexBuffer {
    gl: Rc<glow::Context>,
    raw: glow::NativeBuffer,
    len: usize,
}

impl VertexBuffer {
    /// Uploads `vertices` as a `STATIC_DRAW` array buffer. Leaves it bound.
    pub fn new<T: Pod>(gl: Rc<glow::Context>, vertices: &[T]) -> Result<VertexBuffer> {
        let raw = upload(&gl, glow::ARRAY_BUFFER, bytemuck::cast_slice(vertices))?;
        tracing::debug!(
            buffer = raw.0.get(),
            vertices = vertices.len(),
            size = mem::size_of_val(vertices),
            "created vertex buffer"
        );
        Ok(VertexBuffer {
            gl,
            raw,
            len: vertices.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bind(&self) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.raw)) };
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        tracing::debug!(buffer = self.raw.0.get(), "deleting vertex buffer");
        unsafe { self.gl.delete_buffer(self.raw) };
    }
}

/// `u32` element indices. Create it while the owning vertex array is bound,
/// the binding is stored in the vertex array.
pub struct IndexBuffer {
    gl: Rc<glow::Context>,
    raw: glow::NativeBuffer,
    count: usize,
}

impl IndexBuffer {
    pub fn new(gl: Rc<glow::Context>, indices: &[u32]) -> Result<IndexBuffer> {
        let raw = upload(&gl, glow::ELEMENT_ARRAY_BUFFER, bytemuck::cast_slice(indices))?;
        tracing::debug!(
            buffer = raw.0.get(),
            indices = indices.len(),
            "created index buffer"
        );
        Ok(IndexBuffer {
            gl,
            raw,
            count: indices.len(),
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        tracing::debug!(buffer = self.raw.0.get(), "deleting index buffer");
        unsafe { self.gl.delete_buffer(self.raw) };
    }
}

fn upload(gl: &glow::Context, target: u32, bytes: &[u8]) -> Result<glow::NativeBuffer> {
    unsafe {
        let raw = gl.create_buffer().map_err(Error::gl_object("buffer"))?;
        gl.bind_buffer(target, Some(raw));
        gl.buffer_data_u8_slice(target, bytes, glow::STATIC_DRAW);
        Ok(raw)
    }
}

pub struct VertexArray {
    gl: Rc<glow::Context>,
    raw: glow::NativeVertexArray,
}

impl VertexArray {
    /// Creates the vertex array and leaves it bound.
    pub fn new(gl: Rc<glow::Context>) -> Result<VertexArray> {
        let raw = unsafe {
            let raw = gl
                .create_vertex_array()
                .map_err(Error::gl_object("vertex array"))?;
            gl.bind_vertex_array(Some(raw));
            raw
        };
        tracing::debug!(vao = raw.0.get(), "created vertex array");
        Ok(VertexArray { gl, raw })
    }

    pub fn bind(&self) {
        unsafe { self.gl.bind_vertex_array(Some(self.raw)) };
    }

    pub fn unbind(&self) {
        unsafe { self.gl.bind_vertex_array(None) };
    }

    /// Describes `attribute` as tightly packed or strided floats in `buffer`
    /// and enables it. `stride` and `offset` are in bytes, a zero stride
    /// means tightly packed.
    pub fn attach(&self, buffer: &VertexBuffer, attribute: Attribute, stride: usize, offset: usize) {
        self.bind();
        buffer.bind();
        unsafe {
            self.gl.vertex_attrib_pointer_f32(
                attribute.location,
                attribute.components,
                glow::FLOAT,
                false,
                stride as i32,
                offset as i32,
            );
            self.gl.enable_vertex_attrib_array(attribute.location);
        }
    }

    pub fn draw_arrays(&self, count: usize) {
        self.bind();
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, 0, count as i32) };
        self.unbind();
    }

    pub fn draw_elements(&self, indices: &IndexBuffer) {
        self.bind();
        unsafe {
            self.gl
                .draw_elements(glow::TRIANGLES, indices.count() as i32, glow::UNSIGNED_INT, 0)
        };
        self.unbind();
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        tracing::debug!(vao = self.raw.0.get(), "deleting vertex array");
        unsafe { self.gl.delete_vertex_array(self.raw) };
    }
}
