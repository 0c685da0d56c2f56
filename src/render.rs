//! GPU side of scene drawing.
//!
//! The [`SceneRenderer`] owns everything needed to turn interpreted [`DrawCall`]s into
//! draws: the scene pipeline, the primitive meshes, the per-draw instance buffer, the
//! lights uniform and the texture slot bind group.
//!
//! Each draw call becomes one instance in the instance buffer, and the mesh is drawn
//! with exactly that instance. Draws are issued in the order they were interpreted.

use wgpu::util::DeviceExt;

use crate::{
    data_structures::{
        light::LightsUniform,
        mesh::Primitive,
        texture::{self, Texture},
    },
    manager::DrawCall,
    pipelines::basic::mk_scene_pipeline,
    resources::{
        primitives::MeshLibrary,
        texture::{TextureRegistry, texture_slots_layout},
    },
    shader::{ObjectRaw, ObjectState},
};

#[derive(Debug)]
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    meshes: MeshLibrary,
    slots_layout: wgpu::BindGroupLayout,
    slots_bind_group: wgpu::BindGroup,
    fallback: Texture,
    sampler: wgpu::Sampler,
    lights_buffer: wgpu::Buffer,
    lights_bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    draws: Vec<Primitive>,
}

fn mk_instance_buffer(device: &wgpu::Device, raws: &[ObjectRaw]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Object Instance Buffer"),
        contents: bytemuck::cast_slice(raws),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}

fn lights_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("lights_bind_group_layout"),
    })
}

impl SceneRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        color_format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let slots_layout = texture_slots_layout(device);
        let lights_layout = lights_bind_group_layout(device);
        let pipeline = mk_scene_pipeline(
            device,
            color_format,
            &slots_layout,
            camera_bind_group_layout,
            &lights_layout,
        );

        let fallback = Texture::create_fallback(device, queue);
        let sampler = texture::create_default_sampler(device);
        let slots_bind_group =
            TextureRegistry::<Texture>::new().bind_all(device, &slots_layout, &fallback, &sampler);

        let lights_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lights Buffer"),
            contents: bytemuck::cast_slice(&[LightsUniform::new(&Default::default())]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let lights_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &lights_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: lights_buffer.as_entire_binding(),
            }],
            label: Some("lights_bind_group"),
        });

        // Never empty: binding a zero sized vertex buffer is not allowed.
        let instance_buffer = mk_instance_buffer(device, &[ObjectState::default().to_raw()]);

        Self {
            pipeline,
            meshes: MeshLibrary::new(device),
            slots_layout,
            slots_bind_group,
            fallback,
            sampler,
            lights_buffer,
            lights_bind_group,
            instance_buffer,
            instance_capacity: 1,
            draws: Vec::new(),
        }
    }

    /// Rebuild the slot bind group from the textures in `registry`.
    pub fn bind_textures(&mut self, device: &wgpu::Device, registry: &TextureRegistry<Texture>) {
        self.slots_bind_group =
            registry.bind_all(device, &self.slots_layout, &self.fallback, &self.sampler);
        log::debug!("Bound {} textures to their slots", registry.len());
    }

    /// Upload the per-draw state of `draws` and the current lights.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        draws: &[DrawCall],
        lights: &LightsUniform,
    ) {
        let raws: Vec<ObjectRaw> = draws.iter().map(|draw| draw.object.to_raw()).collect();
        if raws.len() > self.instance_capacity {
            self.instance_buffer = mk_instance_buffer(device, &raws);
            self.instance_capacity = raws.len();
        } else if !raws.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&raws));
        }
        queue.write_buffer(&self.lights_buffer, 0, bytemuck::cast_slice(&[*lights]));
        self.draws = draws.iter().map(|draw| draw.mesh).collect();
    }

    /// Record the prepared draws into `render_pass`.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, camera_bind_group: &wgpu::BindGroup) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.slots_bind_group, &[]);
        render_pass.set_bind_group(1, camera_bind_group, &[]);
        render_pass.set_bind_group(2, &self.lights_bind_group, &[]);
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

        for (instance, primitive) in self.draws.iter().enumerate() {
            let Some(mesh) = self.meshes.get(*primitive) else {
                log::warn!("No mesh was uploaded for {:?}", primitive);
                continue;
            };
            let instance = instance as u32;
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..mesh.num_elements, 0, instance..instance + 1);
        }
    }

    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }
}
