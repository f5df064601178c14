//! Desktop simulator for the tableau-rs panel toolkit.
//!
//! Renders a demo scene in an SDL2 window via `embedded-graphics-simulator`:
//! a container manager with three panels (one of them a focus panel) and a
//! grid selector.
//!
//! # Controls
//!
//! | Input        | Action                                   |
//! |--------------|------------------------------------------|
//! | Click        | Press, open panels, operate widgets      |
//! | Click + move | Drag sliders or size the grid selection  |
//! | Typing       | Edit the focused text field              |
//! | Esc          | Quit                                     |

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::info;

use tableau_rs::ui::core::Key;
use tableau_rs::ui::{
    Action, Button, Canvas, Container, ContainerKind, ContainerManager, Drawable, GridSelector,
    Rect, Slider, TextField, Toggle, Tooltip, WidgetId,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 480;
const DISPLAY_HEIGHT_PX: u32 = 320;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// SDL buttons are all forwarded as the primary button.
const PRIMARY_BUTTON: i32 = 0;

// ---------------------------------------------------------------------------
// Demo scene
// ---------------------------------------------------------------------------

struct Scene {
    manager: ContainerManager,
    grid: GridSelector,
}

impl Scene {
    fn new(canvas: Canvas) -> Self {
        let mut manager = ContainerManager::anchored("Menu", canvas);
        manager.set_opened(true);

        let mut physics = Container::new("Physics", 100.0, 60.0, 20.0, 16.0, true);
        physics.add_slider(Slider::new(
            WidgetId(1),
            "Gravity",
            Rect::new(0.0, 0.0, 120.0, 12.0),
            0.0,
            20.0,
            9.8,
        ));
        physics.add_slider(
            Slider::new(
                WidgetId(2),
                "Drag",
                Rect::new(0.0, 0.0, 120.0, 12.0),
                0.0,
                1.0,
                0.1,
            )
            .with_precision(3),
        );
        physics.add_button(Button::new(
            WidgetId(3),
            "Reset",
            Rect::new(0.0, 0.0, 60.0, 14.0),
        ));
        physics.add_tooltip(Tooltip::new(
            "Gravity and drag apply to every body.",
            20.0,
            120.0,
        ));
        manager.add_container(physics);

        let mut display = Container::new("Display", 100.0, 160.0, 20.0, 16.0, false);
        display.add_toggle(Toggle::new(
            WidgetId(10),
            "Trails",
            Rect::new(0.0, 0.0, 80.0, 12.0),
            true,
        ));
        display.add_toggle(Toggle::new(
            WidgetId(11),
            "Grid",
            Rect::new(0.0, 0.0, 80.0, 12.0),
            false,
        ));
        display.add_text_field(TextField::numeric(
            WidgetId(12),
            "Zoom",
            Rect::new(0.0, 0.0, 80.0, 14.0),
            1.0,
            2,
        ));
        manager.add_container(display);

        let mut creator =
            Container::new("Creator", 100.0, 260.0, 20.0, 16.0, false).with_kind(ContainerKind::Focus);
        creator.add_text_field(TextField::new(
            WidgetId(20),
            "Name",
            Rect::new(0.0, 0.0, 100.0, 14.0),
        ));
        creator.add_button(Button::new(
            WidgetId(21),
            "Spawn",
            Rect::new(0.0, 0.0, 60.0, 14.0),
        ));
        manager.add_container(creator);

        let grid = GridSelector::new("Region", Rect::new(300.0, 120.0, 40.0, 40.0));

        Self { manager, grid }
    }

    fn mouse_pressed(&mut self, x: i32, y: i32) {
        let mut actions = self.manager.mouse_pressed(x, y, PRIMARY_BUTTON);
        actions.extend(self.grid.mouse_pressed(x, y, PRIMARY_BUTTON));
        report(&actions);
    }

    fn mouse_dragged(&mut self, x: i32, y: i32) {
        let mut actions = self.manager.mouse_dragged(x, y, PRIMARY_BUTTON);
        actions.extend(self.grid.mouse_dragged(x, y, PRIMARY_BUTTON));
        report(&actions);
    }

    fn mouse_released(&mut self, x: i32, y: i32) {
        let mut actions = self.manager.mouse_released(x, y, PRIMARY_BUTTON);
        actions.extend(self.grid.mouse_released(x, y, PRIMARY_BUTTON));
        report(&actions);

        if let Some(granularity) = self.grid.take_submission() {
            info!("Grid submitted with {} cells per side", granularity);
        }
    }

    fn key_released(&mut self, key: Key) {
        report(&self.manager.key_released(key.0));
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        let canvas = Canvas::of(&*display);

        self.manager.reposition_containers(canvas);
        // Toggle reports arrive every frame; nothing in the demo consumes them
        self.manager.draw(display, canvas)?;
        self.grid.draw(display, canvas)
    }
}

fn report(actions: &[Action]) {
    for action in actions {
        info!("Action: {:?}", action);
    }
}

/// Map an SDL keycode to the raw key code the widgets expect.
fn keycode_to_key(keycode: Keycode) -> Option<Key> {
    let name = keycode.name();
    let mut chars = name.chars();

    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Some(Key(ch.to_ascii_lowercase() as i32)),
        _ => match name.as_str() {
            "Backspace" => Some(Key::BACKSPACE),
            "Return" | "Keypad Enter" => Some(Key::RETURN),
            "Delete" => Some(Key::DELETE),
            "Space" => Some(Key(' ' as i32)),
            _ => None,
        },
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting tableau-rs simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Tableau Simulator", &output_settings);

    let mut scene = Scene::new(Canvas::of(&display));

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(Rgb565::BLACK);
    window.update(&display);

    let mut pointer_down = false;

    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } if keycode == Keycode::Escape => {
                    break 'running;
                }

                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(key) = keycode_to_key(keycode) {
                        scene.key_released(key);
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    pointer_down = true;
                    scene.mouse_pressed(point.x, point.y);
                }

                SimulatorEvent::MouseMove { point } if pointer_down => {
                    scene.mouse_dragged(point.x, point.y);
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    pointer_down = false;
                    scene.mouse_released(point.x, point.y);
                }

                _ => {}
            }
        }

        // --- Render -------------------------------------------------------
        let _ = display.clear(Rgb565::BLACK);
        if let Err(e) = scene.draw(&mut display) {
            log::error!("Draw error: {:?}", e);
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
