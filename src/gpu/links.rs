//! Link rendering between nearby particles.
//!
//! Each link is one instanced quad expanded perpendicular to the segment in
//! pixel space. The pairs themselves are found on the CPU by
//! `Field::link_instances`; this module only uploads and draws them.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::field::MAX_POPULATION;
use crate::visuals::VisualConfig;

/// Upper bound on simultaneous links: every unordered pair of a full arena.
pub const MAX_LINKS: usize = MAX_POPULATION * (MAX_POPULATION - 1) / 2;

/// One drawn link: segment endpoints in surface pixels plus the
/// distance-derived alpha.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LinkInstance {
    /// First endpoint in surface pixels.
    pub a: [f32; 2],
    /// Second endpoint in surface pixels.
    pub b: [f32; 2],
    /// Stroke alpha, `(1 - distance / radius) * link_alpha`.
    pub alpha: f32,
    /// Keeps the stride a multiple of 8.
    pub _pad: f32,
}

/// Stroke parameters shared by all links.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct LinkParams {
    color: [f32; 3],
    width: f32,
}

/// GPU resources for link rendering.
pub struct LinkState {
    buffer: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
}

impl LinkState {
    pub fn new(
        device: &wgpu::Device,
        uniform_buffer: &wgpu::Buffer,
        visuals: &VisualConfig,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Link Instance Buffer"),
            size: (MAX_LINKS * std::mem::size_of::<LinkInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let params = LinkParams {
            color: visuals.link_color,
            width: visuals.link_width,
        };
        let params_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Link Params Buffer"),
            contents: bytemuck::bytes_of(&params),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Link Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Link Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: params_buffer.as_entire_binding(),
                },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Link Shader"),
            source: wgpu::ShaderSource::Wgsl(LINK_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Link Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Link Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LinkInstance>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2, // a
                        },
                        wgpu::VertexAttribute {
                            offset: 8,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32x2, // b
                        },
                        wgpu::VertexAttribute {
                            offset: 16,
                            shader_location: 2,
                            format: wgpu::VertexFormat::Float32, // alpha
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            buffer,
            pipeline,
            bind_group,
        }
    }

    pub fn upload(&self, queue: &wgpu::Queue, links: &[LinkInstance]) {
        debug_assert!(links.len() <= MAX_LINKS);
        if !links.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(links));
        }
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, count: u32) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.buffer.slice(..));
        render_pass.draw(0..6, 0..count);
    }
}

const LINK_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
};

struct LinkParams {
    color: vec3<f32>,
    width: f32,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;
@group(0) @binding(1) var<uniform> params: LinkParams;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) alpha: f32,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) a: vec2<f32>,
    @location(1) b: vec2<f32>,
    @location(2) alpha: f32,
) -> VertexOutput {
    let dir = normalize(b - a);
    let perp = vec2<f32>(-dir.y, dir.x) * params.width * 0.5;

    var pos: vec2<f32>;
    switch vertex_index {
        case 0u: { pos = a - perp; }
        case 1u: { pos = a + perp; }
        case 2u: { pos = b - perp; }
        case 3u: { pos = a + perp; }
        case 4u: { pos = b - perp; }
        default: { pos = b + perp; }
    }

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(pos, 0.0, 1.0);
    out.alpha = alpha;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(params.color, in.alpha);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_shader_is_valid_wgsl() {
        let module = naga::front::wgsl::parse_str(LINK_SHADER).expect("link shader parses");
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .expect("link shader validates");
    }

    #[test]
    fn test_link_capacity_covers_full_arena() {
        assert_eq!(MAX_LINKS, 4950);
    }

    #[test]
    fn test_link_instance_layout() {
        assert_eq!(std::mem::size_of::<LinkInstance>(), 24);
    }
}
