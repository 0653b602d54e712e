use super::helpers;
use crate::scene::ParticleField;
use wgpu::util::DeviceExt;

/// One per particle, uploaded once; the vertex stage expands each instance
/// into a camera-facing quad and applies the floating motion.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleInstance {
    pub(crate) pos: [f32; 3],
    pub(crate) size: f32,
    pub(crate) color: [f32; 3],
    pub(crate) _pad: f32,
}

pub(crate) fn pack_instances(field: &ParticleField) -> Vec<ParticleInstance> {
    (0..field.len())
        .map(|i| ParticleInstance {
            pos: field.positions[i].to_array(),
            size: field.sizes[i],
            color: field.colors[i],
            _pad: 0.0,
        })
        .collect()
}

pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) instance_count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    bgl: &wgpu::BindGroupLayout,
    field: &ParticleField,
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(super::PARTICLES_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("particles_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_particles"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x3],
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_particles"),
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

    let instances = pack_instances(field);
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_instances"),
        contents: bytemuck::cast_slice(&instances),
        usage: wgpu::BufferUsages::VERTEX,
    });

    ParticleResources {
        pipeline,
        instance_buffer,
        instance_count: instances.len() as u32,
    }
}
