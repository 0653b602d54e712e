use super::helpers;
use crate::scene::{ConnectionLine, SceneState};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LineVertex {
    pub(crate) pos: [f32; 3],
    pub(crate) _pad: f32,
}

/// Two vertices per line, endpoints rotated by each line's accumulated spin.
pub(crate) fn pack_vertices(scene: &SceneState, lines: &[ConnectionLine]) -> Vec<LineVertex> {
    let mut verts = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.iter().enumerate() {
        let (a, b) = scene.rotated_endpoints(line, i);
        verts.push(LineVertex {
            pos: a.to_array(),
            _pad: 0.0,
        });
        verts.push(LineVertex {
            pos: b.to_array(),
            _pad: 0.0,
        });
    }
    verts
}

pub(crate) struct LineResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
}

pub(crate) fn create_line_resources(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    bgl: &wgpu::BindGroupLayout,
    line_count: usize,
) -> LineResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lines_shader"),
        source: wgpu::ShaderSource::Wgsl(super::LINES_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("lines_pl"),
        bind_group_layouts: &[bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("lines_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_lines"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<LineVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3],
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_lines"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(helpers::additive_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    // Rewritten every frame with the rotated endpoints.
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("line_vertices"),
        size: (line_count * 2 * std::mem::size_of::<LineVertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    LineResources {
        pipeline,
        vertex_buffer,
    }
}
