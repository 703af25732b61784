//! Desktop simulator for the clock dial time picker.
//!
//! Opens a 320x240 window (scaled x2) with the picker: hour and minute labels
//! on the left, the dial on the right.
//!
//! # Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | Mouse press / drag / release | Touch |
//! | `H` | Select hour |
//! | `M` | Select minute |
//! | `L` | Toggle log page |
//! | `Escape` | Quit |
//!
//! # Arguments
//!
//! Every argument is a `name=value` dial attribute, for example:
//!
//! ```bash
//! cargo run --features simulator -- radius=90 hour=7 minute_fill_color=#FFA500
//! ```
//!
//! See [`clockview::config`] for the attribute list.

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clockview::colors::BLACK;
use clockview::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, split_attribute};
use clockview::screens::draw_logs_page;
use clockview::{DialConfig, Page, PointerKind, TimeLabels, TimePicker, TouchEvent};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

fn main() -> ExitCode {
    // ==========================================================================
    // Configuration
    // ==========================================================================

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut attributes = Vec::with_capacity(args.len());
    for arg in &args {
        match split_attribute(arg) {
            Some(pair) => attributes.push(pair),
            None => {
                eprintln!("expected name=value, got `{arg}`");
                return ExitCode::FAILURE;
            }
        }
    }
    let config = match DialConfig::from_attributes(attributes) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid dial attribute: {err}");
            return ExitCode::FAILURE;
        }
    };

    // ==========================================================================
    // Display and Picker
    // ==========================================================================

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Clock Dial", &output_settings);

    // The window only exists after the first update
    display.clear(BLACK).ok();
    window.update(&display);

    let labels = TimeLabels::new();
    let mut picker = match TimePicker::new(config, &labels) {
        Ok(picker) => picker,
        Err(err) => {
            eprintln!("cannot start picker: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut current_page = Page::default();
    let mut page_just_switched = true;
    let mut mouse_down = false;

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    picker.shutdown();
                    return ExitCode::SUCCESS;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => {
                            picker.shutdown();
                            return ExitCode::SUCCESS;
                        }
                        Keycode::H if current_page == Page::Picker => picker.select(PointerKind::Hour),
                        Keycode::M if current_page == Page::Picker => picker.select(PointerKind::Minute),
                        Keycode::L => {
                            current_page = current_page.toggle();
                            page_just_switched = true;
                        }
                        _ => {}
                    }
                }
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } if current_page == Page::Picker => {
                    mouse_down = true;
                    picker.handle_touch(TouchEvent::Press(point));
                }
                SimulatorEvent::MouseMove { point } if mouse_down && current_page == Page::Picker => {
                    picker.handle_touch(TouchEvent::Drag(point));
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } if mouse_down => {
                    mouse_down = false;
                    picker.handle_touch(TouchEvent::Release(point));
                }
                _ => {}
            }
        }

        // Redraw only when something changed
        let picker_dirty = picker.take_redraw_request();
        match current_page {
            Page::Picker if picker_dirty || page_just_switched => {
                picker.draw(&mut display).ok();
            }
            Page::Logs if picker_dirty || page_just_switched => {
                draw_logs_page(&mut display, picker.log()).ok();
            }
            _ => {}
        }
        page_just_switched = false;

        window.update(&display);

        // Sleep to maintain target frame rate
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
