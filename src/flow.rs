//! Application event loop.
//!
//! [`run`] opens a window, prepares the scene (textures, materials, lights, meshes) and
//! then redraws it until the window is closed. Every frame the scene's draw commands are
//! interpreted again by the [`SceneManager`] and the resulting draws are recorded by the
//! [`SceneRenderer`].
//!
//! # Lifecycle
//!
//! 1. `resumed` creates the window and starts the async initialisation
//!    (blocking on a tokio runtime natively, `spawn_local` on the web)
//! 2. initialisation loads the textures concurrently and uploads everything else
//! 3. `RedrawRequested` interprets the scene, uploads the per-draw state and renders
//! 4. `Resized` reconfigures the surface, depth texture and projection

use std::{fmt::Debug, iter, sync::Arc};

use instant::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    config::Config,
    context::Context,
    data_structures::scene::SceneDescription,
    manager::SceneManager,
    render::SceneRenderer,
    shader::UniformBlock,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Everything that exists once initialisation finished.
#[derive(Debug)]
pub struct AppState {
    pub(crate) ctx: Context,
    manager: SceneManager,
    renderer: SceneRenderer,
    uniforms: UniformBlock,
    scene: Arc<SceneDescription>,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(
        window: Arc<Window>,
        scene: Arc<SceneDescription>,
        config: Config,
    ) -> anyhow::Result<Self> {
        let ctx = Context::new(window, &config).await?;

        let missing = scene.undefined_tags();
        if !missing.is_empty() {
            log::warn!("The scene uses tags it never defines: {:?}", missing);
        }

        let mut manager = SceneManager::new();
        manager
            .prepare(&ctx.device, &ctx.queue, &config.asset_root, &scene)
            .await;

        let mut renderer = SceneRenderer::new(
            &ctx.device,
            &ctx.queue,
            ctx.config.format,
            &ctx.camera.bind_group_layout,
        );
        renderer.bind_textures(&ctx.device, &manager.textures);

        let mut uniforms = UniformBlock::new();
        manager.setup_lights(&mut uniforms, &scene.lights);

        Ok(Self {
            ctx,
            manager,
            renderer,
            uniforms,
            scene,
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.ctx.resize(width, height) {
            self.is_surface_configured = true;
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let draws = self
            .manager
            .render_scene(&self.scene.commands, &mut self.uniforms);
        self.renderer.prepare(
            &self.ctx.device,
            &self.ctx.queue,
            &draws,
            &self.uniforms.lights_uniform(),
        );

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
                multiview_mask: None,
            });

            self.renderer
                .draw(&mut render_pass, &self.ctx.camera.bind_group);
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

pub(crate) enum FlowEvent {
    #[allow(dead_code)]
    Initialized(Box<AppState>),
}

impl Debug for FlowEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized(_) => f.write_str("Initialized"),
        }
    }
}

pub struct App {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    #[allow(dead_code)]
    proxy: winit::event_loop::EventLoopProxy<FlowEvent>,
    state: Option<AppState>,
    scene: Arc<SceneDescription>,
    config: Config,
    last_time: Instant,
}

impl App {
    fn new(
        event_loop: &EventLoop<FlowEvent>,
        scene: SceneDescription,
        config: Config,
    ) -> anyhow::Result<Self> {
        let proxy = event_loop.create_proxy();
        #[cfg(not(target_arch = "wasm32"))]
        let async_runtime = tokio::runtime::Runtime::new()?;
        Ok(Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime,
            proxy,
            state: None,
            scene: Arc::new(scene),
            config,
            last_time: Instant::now(),
        })
    }

    fn start(&mut self, mut state: AppState) {
        let size = state.ctx.window.inner_size();
        state.resize(size.width, size.height);
        state.ctx.window.request_redraw();
        log::info!(
            "Scene ready: {} draw commands, {} textures, {} materials",
            self.scene.commands.len(),
            state.manager.textures.len(),
            state.manager.materials.len()
        );
        self.state = Some(state);
    }
}

impl ApplicationHandler<FlowEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            const CANVAS_ID: &str = "canvas";

            let window = wgpu::web_sys::window().unwrap_throw();
            let document = window.document().unwrap_throw();
            let canvas = document.get_element_by_id(CANVAS_ID).unwrap_throw();
            let html_canvas_element = canvas.unchecked_into();
            window_attributes = window_attributes.with_canvas(Some(html_canvas_element));
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Could not create a window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let init_future = AppState::new(window, self.scene.clone(), self.config.clone());

        #[cfg(not(target_arch = "wasm32"))]
        {
            match self.async_runtime.block_on(init_future) {
                Ok(state) => self.start(state),
                Err(e) => {
                    log::error!("App initialization failed: {:#}", e);
                    event_loop.exit();
                }
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match init_future.await {
                    Ok(state) => {
                        if proxy
                            .send_event(FlowEvent::Initialized(Box::new(state)))
                            .is_err()
                        {
                            log::error!("Event loop closed before the scene was ready");
                        }
                    }
                    Err(e) => log::error!("App initialization failed: {:#}", e),
                }
            });
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: FlowEvent) {
        match event {
            // sent by the wasm `spawn_local` in `resumed`
            FlowEvent::Initialized(state) => self.start(*state),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();
                log::trace!("frame time {:?}", dt);

                match state.render() {
                    Ok(_) => {}
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Open a window and render `scene` until it is closed.
pub fn run(scene: SceneDescription, config: Config) -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            eprintln!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| anyhow::anyhow!("could not initialize logger: {}", e))?;
    }

    let event_loop: EventLoop<FlowEvent> = EventLoop::with_user_event().build()?;

    let mut app = App::new(&event_loop, scene, config)?;

    event_loop.run_app(&mut app)?;

    Ok(())
}
