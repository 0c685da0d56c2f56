mod common;

#[cfg(feature = "integration-tests")]
mod gpu {
    use crate::common::test_utils::{fixture_dir, headless_device, png_bytes, quad_image};
    use pc_diorama::{
        SceneManager, UniformBlock,
        camera::{Camera, CameraResources, Projection},
        data_structures::{
            mesh::Primitive,
            scene::TextureSource,
            texture::{Texture, TextureError},
        },
        desktop,
        render::SceneRenderer,
        resources::{
            primitives::MeshLibrary,
            texture::{TextureRegistry, texture_slots_layout},
        },
    };

    #[test]
    fn textures_upload_and_bind() {
        let Some((device, queue)) = headless_device() else {
            eprintln!("no adapter available, skipping");
            return;
        };
        let mut registry = TextureRegistry::<Texture>::new();

        let slot = registry
            .load_bytes(&device, &queue, &png_bytes(&quad_image()), "quad.png", "quad")
            .unwrap();
        let duplicate =
            registry.load_bytes(&device, &queue, &png_bytes(&quad_image()), "quad.png", "quad");

        assert_eq!(slot, 0);
        assert!(matches!(duplicate, Err(TextureError::DuplicateTag(_))));
        let texture = registry.handle_of("quad").unwrap();
        assert_eq!(texture.texture.mip_level_count(), 2);

        let layout = texture_slots_layout(&device);
        let fallback = Texture::create_fallback(&device, &queue);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor::default());
        let _bind_group = registry.bind_all(&device, &layout, &fallback, &sampler);

        assert_eq!(registry.release_all(), 1);
    }

    #[test]
    fn failed_sources_are_skipped_without_leaving_a_gap() {
        let Some((device, queue)) = headless_device() else {
            eprintln!("no adapter available, skipping");
            return;
        };
        let root = fixture_dir("load-all");
        for name in ["wood.png", "wall.png"] {
            std::fs::write(root.join("textures").join(name), png_bytes(&quad_image())).unwrap();
        }
        let sources = [
            TextureSource::new("textures/wood.png", "stand"),
            TextureSource::new("textures/missing.png", "chip"),
            TextureSource::new("textures/wall.png", "wall"),
        ];
        let mut registry = TextureRegistry::<Texture>::new();

        let loaded =
            tokio::runtime::Runtime::new().unwrap().block_on(registry.load_all(&device, &queue, &root, &sources));

        assert_eq!(loaded, 2);
        assert_eq!(registry.slot_of("stand"), Some(0));
        assert_eq!(registry.slot_of("chip"), None);
        assert_eq!(registry.slot_of("wall"), Some(1));
    }

    #[test]
    fn single_load_reports_a_missing_file() {
        let Some((device, queue)) = headless_device() else {
            eprintln!("no adapter available, skipping");
            return;
        };
        let root = fixture_dir("load-one");
        let mut registry = TextureRegistry::<Texture>::new();

        let result = tokio::runtime::Runtime::new().unwrap().block_on(registry.load(
            &device,
            &queue,
            &root,
            "textures/missing.png",
            "stand",
        ));

        assert!(matches!(result, Err(TextureError::Io { path, .. }) if path == "textures/missing.png"));
        assert!(registry.is_empty());
    }

    #[test]
    fn every_primitive_is_uploaded() {
        let Some((device, _queue)) = headless_device() else {
            eprintln!("no adapter available, skipping");
            return;
        };

        let meshes = MeshLibrary::new(&device);

        for primitive in Primitive::ALL {
            let mesh = meshes.get(primitive).unwrap();
            assert!(mesh.num_elements > 0);
            assert_eq!(mesh.name, primitive.name());
        }
    }

    #[test]
    fn desktop_scene_prepares_one_draw_per_command() {
        let Some((device, queue)) = headless_device() else {
            eprintln!("no adapter available, skipping");
            return;
        };
        let scene = desktop::scene();
        let camera = Camera::new((0.0, 8.0, 22.0), cgmath::Deg(-90.0), cgmath::Deg(-5.0));
        let projection = Projection::new(64, 64, cgmath::Deg(45.0), 0.1, 100.0);
        let camera = CameraResources::new(&device, camera, &projection);

        let manager = SceneManager::<Texture>::new();
        let mut renderer = SceneRenderer::new(
            &device,
            &queue,
            wgpu::TextureFormat::Rgba8Unorm,
            &camera.bind_group_layout,
        );
        renderer.bind_textures(&device, &manager.textures);
        let mut uniforms = UniformBlock::new();
        manager.setup_lights(&mut uniforms, &scene.lights);
        let draws = manager.render_scene(&scene.commands, &mut uniforms);

        renderer.prepare(&device, &queue, &draws, &uniforms.lights_uniform());

        assert_eq!(renderer.draw_count(), scene.commands.len());
    }
}
