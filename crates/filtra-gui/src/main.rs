//! Filtra GUI Application
//!
//! One window per opened image: a blur-preview slider, filter toggle
//! buttons, one-shot effect buttons, and click-to-annotate. All state and
//! algorithms live in filtra-core; this shell only maps egui events onto
//! the window controller and uploads frames as textures.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use filtra_core::config::{self, UiDefaults};
use filtra_core::controller::{DisplaySurface, WindowController};
use filtra_core::io::decode_image;
use filtra_core::{EffectKind, FilterKind, ImageBuffer};

#[derive(Parser)]
#[command(name = "filtra")]
#[command(version, about = "Interactive image filter playground", long_about = None)]
struct Cli {
    /// Image files to open, one window each
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Configuration file (YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();
    config::set_verbose(cli.verbose);

    let defaults = if let Some(path) = cli.config.as_deref() {
        let handle = config::load_ui_config(Some(path));
        config::log_config_usage(&handle);
        handle.config.defaults
    } else {
        let handle = config::ui_config_handle();
        config::log_config_usage(handle);
        handle.config.defaults.clone()
    };

    let mut app = FiltraApp::new(defaults);
    for path in &cli.files {
        println!("{}", path.display());
        let image = match decode_image(path) {
            Ok(image) => image,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        if let Err(err) = app.open(&name, image) {
            eprintln!("{}", err);
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Filtra"),
        ..Default::default()
    };

    eframe::run_native("Filtra", options, Box::new(|_cc| Ok(Box::new(app))))
}

/// Frames pending display, keyed by window name. Textures are rebuilt
/// lazily on the next egui frame after a present.
#[derive(Default)]
struct FrameStore {
    frames: BTreeMap<String, DisplayFrame>,
}

struct DisplayFrame {
    buffer: ImageBuffer,
    texture: Option<egui::TextureHandle>,
}

impl DisplaySurface for FrameStore {
    fn present(&mut self, name: &str, frame: &ImageBuffer) {
        self.frames.insert(
            name.to_string(),
            DisplayFrame {
                buffer: frame.clone(),
                texture: None,
            },
        );
    }

    fn release(&mut self, name: &str) {
        self.frames.remove(name);
    }
}

/// One UI event harvested from the widgets, applied through the controller
/// after all windows have been drawn.
enum UiEvent {
    Slide { window: String, pos: i32 },
    Click { window: String, x: i32, y: i32 },
    Toggle { window: String, kind: FilterKind },
    Effect { window: String, kind: EffectKind },
    Close { window: String },
}

struct FiltraApp {
    controller: WindowController<FrameStore>,
    defaults: UiDefaults,
    slider_values: BTreeMap<String, u32>,
}

/// Per-window widget state gathered up front so drawing never borrows the
/// controller mutably.
struct WindowView {
    name: String,
    texture: egui::TextureHandle,
    image_size: (u32, u32),
    controls: Option<SessionControls>,
}

struct SessionControls {
    active: Vec<(FilterKind, bool)>,
    is_color: bool,
    slider: u32,
}

impl FiltraApp {
    fn new(defaults: UiDefaults) -> Self {
        Self {
            controller: WindowController::new(FrameStore::default()),
            defaults,
            slider_values: BTreeMap::new(),
        }
    }

    fn open(&mut self, name: &str, image: ImageBuffer) -> Result<(), String> {
        self.slider_values.insert(name.to_string(), 0);
        self.controller.open(name, image, self.defaults.clone())
    }

    fn build_views(&mut self, ctx: &egui::Context) -> Vec<WindowView> {
        // Upload any frame whose texture was invalidated by a present.
        for (name, frame) in &mut self.controller.surface_mut().frames {
            if frame.texture.is_none() {
                let size = [frame.buffer.width() as usize, frame.buffer.height() as usize];
                let color_image = egui::ColorImage::from_rgb(size, &frame.buffer.to_rgb8());
                frame.texture = Some(ctx.load_texture(name.clone(), color_image, Default::default()));
            }
        }

        let mut views = Vec::new();
        for (name, frame) in &self.controller.surface().frames {
            let Some(texture) = frame.texture.clone() else {
                continue;
            };
            let controls = self.controller.session(name).map(|session| SessionControls {
                active: FilterKind::ALL
                    .iter()
                    .map(|&kind| (kind, session.active_filters().contains(kind)))
                    .collect(),
                is_color: session.base().channels() == 3,
                slider: self.slider_values.get(name).copied().unwrap_or(0),
            });
            views.push(WindowView {
                name: name.clone(),
                texture,
                image_size: (frame.buffer.width(), frame.buffer.height()),
                controls,
            });
        }
        views
    }

    fn show_window(&self, ctx: &egui::Context, view: &WindowView, events: &mut Vec<UiEvent>) {
        let mut open = true;
        egui::Window::new(&view.name)
            .open(&mut open)
            .resizable(true)
            .show(ctx, |ui| {
                if let Some(controls) = &view.controls {
                    self.show_controls(ui, view, controls, events);
                }

                egui::ScrollArea::both()
                    .id_salt(&view.name)
                    .show(ui, |ui| {
                        let size = view.texture.size_vec2();
                        let sense = if view.controls.is_some() {
                            egui::Sense::click()
                        } else {
                            egui::Sense::hover()
                        };
                        let response =
                            ui.add(egui::Image::new((view.texture.id(), size)).sense(sense));

                        if response.clicked() {
                            if let Some(pos) = response.interact_pointer_pos() {
                                // Displayed 1:1, so widget offsets are pixel
                                // coordinates.
                                let image_pos = pos - response.rect.min;
                                let (w, h) = view.image_size;
                                let x = (image_pos.x.round() as i32).clamp(0, w as i32 - 1);
                                let y = (image_pos.y.round() as i32).clamp(0, h as i32 - 1);
                                events.push(UiEvent::Click {
                                    window: view.name.clone(),
                                    x,
                                    y,
                                });
                            }
                        }
                    });
            });

        if !open {
            events.push(UiEvent::Close {
                window: view.name.clone(),
            });
        }
    }

    fn show_controls(
        &self,
        ui: &mut egui::Ui,
        view: &WindowView,
        controls: &SessionControls,
        events: &mut Vec<UiEvent>,
    ) {
        let mut slider = controls.slider;
        if ui
            .add(egui::Slider::new(&mut slider, 0..=self.defaults.slider_max).text("Blur"))
            .changed()
        {
            events.push(UiEvent::Slide {
                window: view.name.clone(),
                pos: slider as i32,
            });
        }

        ui.horizontal(|ui| {
            for &(kind, active) in &controls.active {
                if ui.selectable_label(active, kind.as_str()).clicked() {
                    events.push(UiEvent::Toggle {
                        window: view.name.clone(),
                        kind,
                    });
                }
            }
        });

        ui.horizontal(|ui| {
            for kind in EffectKind::ALL {
                // Lomography needs color input; don't offer it for
                // intensity images.
                let enabled = controls.is_color || kind != EffectKind::Lomo;
                if ui
                    .add_enabled(enabled, egui::Button::new(kind.as_str()))
                    .clicked()
                {
                    events.push(UiEvent::Effect {
                        window: view.name.clone(),
                        kind,
                    });
                }
            }
        });

        ui.separator();
    }

    fn apply_events(&mut self, events: Vec<UiEvent>) {
        for event in events {
            let result = match event {
                UiEvent::Slide { window, pos } => {
                    self.slider_values.insert(window.clone(), pos.max(0) as u32);
                    self.controller.slider_changed(&window, pos)
                }
                UiEvent::Click { window, x, y } => self.controller.pointer_pressed(&window, x, y),
                UiEvent::Toggle { window, kind } => self.controller.filter_toggled(&window, kind),
                UiEvent::Effect { window, kind } => self.controller.effect_requested(&window, kind),
                UiEvent::Close { window } => {
                    if self.controller.session(&window).is_some() {
                        self.slider_values.remove(&window);
                        self.controller.close(&window)
                    } else {
                        // Effect output window; just drop the frame.
                        self.controller.surface_mut().release(&window);
                        Ok(())
                    }
                }
            };
            if let Err(err) = result {
                eprintln!("[filtra] {}", err);
            }
        }
    }
}

impl eframe::App for FiltraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.controller.is_empty() {
                ui.label("All windows closed.");
            }
        });

        let views = self.build_views(ctx);
        let mut events = Vec::new();
        for view in &views {
            self.show_window(ctx, view, &mut events);
        }
        self.apply_events(events);
    }
}
