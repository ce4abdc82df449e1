//! Desktop preview app for strip-animator programs
//!
//! Runs the frame loop against a simulated strip and shows it in a window.
//! The "Button" control goes through the same poller and input queue as the
//! physical button on the device.

use std::time::{Instant as StdInstant, SystemTime, UNIX_EPOCH};

use eframe::egui::{self};
use strip_animator::{
    AnimationEngine, Button, ButtonPoller, EngineConfig, EntropySource, FrameScheduler, Instant,
    InputQueue, OutputDriver, ProgramId, Rgb,
};

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 60;

/// Number of animation slots; per-pixel programs need one per LED
const SLOT_COUNT: usize = LED_COUNT;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Input queue size
const INPUT_QUEUE_SIZE: usize = 8;

/// Static input queue between the button poller and the frame loop
static INPUT_QUEUE: InputQueue<INPUT_QUEUE_SIZE> = InputQueue::<INPUT_QUEUE_SIZE>::new();

/// Seeds from the wall clock, the closest thing to a floating analog pin here
struct ClockEntropy;

impl EntropySource for ClockEntropy {
    fn read_noise(&mut self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos())
            .unwrap_or_default()
    }
}

/// Button level driven by the UI
#[derive(Default)]
struct UiButton {
    held: bool,
}

impl Button for UiButton {
    fn is_pressed(&mut self) -> bool {
        self.held
    }
}

/// Keeps the last written frame for drawing
#[derive(Default)]
struct PreviewOutput {
    frame: Vec<Rgb>,
}

impl OutputDriver for PreviewOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

type PreviewScheduler =
    FrameScheduler<'static, PreviewOutput, ClockEntropy, LED_COUNT, SLOT_COUNT, INPUT_QUEUE_SIZE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Render as a 1D strip, wrapped to available window width
    Strip,
    /// Render as a ring, the way the strip is mounted on the device
    Ring,
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Strip Animator Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "strip-animator-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Frame loop driving the engine
    scheduler: PreviewScheduler,
    /// Input loop sampling the on-screen button
    poller: ButtonPoller<'static, UiButton, INPUT_QUEUE_SIZE>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
    /// Preview layout
    layout: Layout,
}

impl PreviewApp {
    fn new() -> Self {
        let engine = AnimationEngine::new(ClockEntropy, EngineConfig::default());
        let scheduler =
            FrameScheduler::new(engine, PreviewOutput::default(), INPUT_QUEUE.receiver());
        let poller = ButtonPoller::new(UiButton::default(), INPUT_QUEUE.sender());

        Self {
            scheduler,
            poller,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
            layout: Layout::Strip,
        }
    }

    /// Reset time to zero and restart the current program
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        let program = self.scheduler.engine().current_program();
        self.scheduler.engine_mut().select_program(program);
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // <PlaybackControls>
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    if ui.button("⏮ Reset").clicked() {
                        self.reset_time();
                    }
                    if ui
                        .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                        .clicked()
                    {
                        self.playing = !self.playing;
                    }
                });

                ui.add_space(4.0);

                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label("Speed:");
                    ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                });
            });
            // </PlaybackControls>
            ui.add_space(16.0);
            // <LayoutSelector>
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Size: ");
                    ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label("Layout:");
                    ui.selectable_value(&mut self.layout, Layout::Strip, "strip");
                    ui.selectable_value(&mut self.layout, Layout::Ring, "ring");
                });
            });
            // </LayoutSelector>
        });

        ui.add_space(16.0);

        ui.horizontal(|ui| {
            let button = ui.add(egui::Button::new("Button").min_size(egui::vec2(72.0, 24.0)));
            self.poller.button_mut().held = button.is_pointer_button_down_on();

            ui.add_space(8.0);

            ui.label("Program:");
            let current = self.scheduler.engine().current_program();
            let mut selected = current;
            egui::ComboBox::from_id_salt("program_selector")
                .selected_text(current.as_str())
                .show_ui(ui, |ui| {
                    for program in ProgramId::ALL {
                        ui.selectable_value(&mut selected, program, program.as_str());
                    }
                });
            if selected != current {
                self.scheduler.engine_mut().select_program(selected);
            }

            ui.add_space(8.0);

            let active = self.scheduler.engine().animator().active_count();
            ui.label(format!("Slots: {active}/{SLOT_COUNT}"));
        });
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update synthetic time
        self.update_time();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.controls(ui);

            // Input loop, then frame loop, once per repaint
            self.poller.poll();
            self.scheduler.tick(Instant::from_millis(self.t_ms));
            let frame = &self.scheduler.output().frame;

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            match self.layout {
                Layout::Strip => {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
                    let rows = frame.len().div_ceil(leds_per_row);
                    #[allow(clippy::cast_precision_loss)]
                    let height = rows as f32 * led_pitch;

                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(available_width, height),
                        egui::Sense::hover(),
                    );
                    let origin = response.rect.min;

                    #[allow(clippy::cast_precision_loss)]
                    for (i, pixel) in frame.iter().enumerate() {
                        let row = i / leds_per_row;
                        let col = i % leds_per_row;
                        let x = origin.x + col as f32 * led_pitch;
                        let y = origin.y + row as f32 * led_pitch;

                        let rect = egui::Rect::from_min_size(
                            egui::pos2(x, y),
                            egui::vec2(self.led_size, self.led_size),
                        );
                        let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                        painter.rect_filled(rect, 3.0, color);
                    }
                }
                Layout::Ring => {
                    #[allow(clippy::cast_precision_loss)]
                    let circumference = frame.len() as f32 * led_pitch;
                    let radius = (circumference / std::f32::consts::TAU).max(led_pitch);
                    let side = 2.0 * radius + self.led_size;

                    let (response, painter) =
                        ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
                    let center = response.rect.center();

                    #[allow(clippy::cast_precision_loss)]
                    for (i, pixel) in frame.iter().enumerate() {
                        let angle = i as f32 / frame.len() as f32 * std::f32::consts::TAU;
                        let position = center + radius * egui::vec2(angle.cos(), angle.sin());

                        let rect = egui::Rect::from_center_size(
                            position,
                            egui::vec2(self.led_size, self.led_size),
                        );
                        let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                        painter.rect_filled(rect, 2.0, color);
                    }
                }
            }
        });
    }
}
