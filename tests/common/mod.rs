//! Shared test infrastructure for mood-lamp integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use mood_lamp::{
    Channel, Color, Device, Lamp, LampConfig, Microphone, ModeButton, NoIndicator, RgbLed,
    StatusIndicator,
};
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;

// ============================================================================
// Simulated board
// ============================================================================

/// Everything the lamp does to the simulated hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Full color now shown on the LED.
    Led(Color),
    /// One ADC conversion and its result.
    MicRead(u16),
    /// One button poll and what it saw.
    Poll(bool),
    /// Busy-wait of this many nanoseconds.
    Delay(u32),
    /// Status indicator switched on or off.
    Indicator(bool),
}

struct SimState {
    now_ns: u64,
    presses: Vec<(u64, u64)>,
    mic: Box<dyn FnMut(u64) -> u16>,
    led: [u8; 3],
    events: Vec<(u64, Event)>,
}

impl SimState {
    fn now_us(&self) -> u64 {
        self.now_ns / 1_000
    }

    fn record(&mut self, event: Event) {
        let now = self.now_us();
        self.events.push((now, event));
    }
}

/// Simulated board with a virtual clock.
///
/// Time only moves when the lamp busy-waits. The microphone is a function of
/// time and the button is held during scripted windows.
#[derive(Clone)]
pub struct Sim(Rc<RefCell<SimState>>);

impl Sim {
    /// Quiet room, button never pressed.
    pub fn new() -> Self {
        Self::with_mic(|_| 50)
    }

    /// Microphone level as a function of time in microseconds.
    pub fn with_mic(mic: impl FnMut(u64) -> u16 + 'static) -> Self {
        Sim(Rc::new(RefCell::new(SimState {
            now_ns: 0,
            presses: Vec::new(),
            mic: Box::new(mic),
            led: [0; 3],
            events: Vec::new(),
        })))
    }

    /// Holds the button from `start_us` until just before `end_us`.
    pub fn press(&self, start_us: u64, end_us: u64) {
        self.0.borrow_mut().presses.push((start_us, end_us));
    }

    pub fn now_us(&self) -> u64 {
        self.0.borrow().now_us()
    }

    /// All events so far, stamped with their time in microseconds.
    pub fn events(&self) -> Vec<(u64, Event)> {
        self.0.borrow().events.clone()
    }

    pub fn event_count(&self) -> usize {
        self.0.borrow().events.len()
    }

    /// Events recorded from index `from` on, without timestamps.
    pub fn events_since(&self, from: usize) -> Vec<Event> {
        self.0.borrow().events[from..].iter().map(|(_, e)| *e).collect()
    }

    /// Every LED color shown, in order, with its time.
    pub fn led_history(&self) -> Vec<(u64, Color)> {
        self.0
            .borrow()
            .events
            .iter()
            .filter_map(|(t, e)| match e {
                Event::Led(c) => Some((*t, *c)),
                _ => None,
            })
            .collect()
    }

    pub fn device(&self) -> SimDevice {
        self.bare_device()
            .with_indicator(SimIndicator(self.clone()))
    }

    /// Device without a status indicator.
    pub fn bare_device(&self) -> BareDevice {
        Device::new(
            SimMic(self.clone()),
            SimButton(self.clone()),
            SimLed(self.clone()),
            SimDelay(self.clone()),
        )
    }

    pub fn lamp(&self, config: LampConfig) -> SimLamp {
        Lamp::new(self.device(), config).unwrap()
    }

    pub fn bare_lamp(&self, config: LampConfig) -> BareLamp {
        Lamp::new(self.bare_device(), config).unwrap()
    }
}

pub type SimDevice = Device<SimMic, SimButton, SimLed, SimDelay, SimIndicator>;
pub type SimLamp = Lamp<SimMic, SimButton, SimLed, SimDelay, SimIndicator>;
pub type BareDevice = Device<SimMic, SimButton, SimLed, SimDelay, NoIndicator>;
pub type BareLamp = Lamp<SimMic, SimButton, SimLed, SimDelay, NoIndicator>;

// ============================================================================
// Mock drivers
// ============================================================================

pub struct SimMic(Sim);

impl Microphone for SimMic {
    fn read_level(&mut self) -> u16 {
        let mut state = self.0.0.borrow_mut();
        let now = state.now_us();
        let level = (state.mic)(now);
        state.record(Event::MicRead(level));
        level
    }
}

pub struct SimButton(Sim);

impl ModeButton for SimButton {
    fn is_pressed(&mut self) -> bool {
        let mut state = self.0.0.borrow_mut();
        let now = state.now_us();
        let pressed = state
            .presses
            .iter()
            .any(|&(start, end)| now >= start && now < end);
        state.record(Event::Poll(pressed));
        pressed
    }
}

pub struct SimLed(Sim);

impl RgbLed for SimLed {
    fn set_channel(&mut self, channel: Channel, value: u8) {
        let mut state = self.0.0.borrow_mut();
        match channel {
            Channel::Red => state.led[0] = value,
            Channel::Green => state.led[1] = value,
            Channel::Blue => state.led[2] = value,
        }
        let [r, g, b] = state.led;
        state.record(Event::Led(Color::new(r, g, b)));
    }

    fn set_color(&mut self, color: Color) {
        let mut state = self.0.0.borrow_mut();
        state.led = [color.red, color.green, color.blue];
        state.record(Event::Led(color));
    }
}

pub struct SimDelay(Sim);

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mut state = self.0.0.borrow_mut();
        state.record(Event::Delay(ns));
        state.now_ns += ns as u64;
    }
}

pub struct SimIndicator(Sim);

impl StatusIndicator for SimIndicator {
    fn set(&mut self, on: bool) {
        self.0.0.borrow_mut().record(Event::Indicator(on));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Total busy-wait time, in microseconds, across `events`.
pub fn waited_us(events: &[Event]) -> u64 {
    events
        .iter()
        .map(|e| match e {
            Event::Delay(ns) => *ns as u64 / 1_000,
            _ => 0,
        })
        .sum()
}

/// LED colors in `events`, in order.
pub fn led_colors(events: &[Event]) -> Vec<Color> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Led(c) => Some(*c),
            _ => None,
        })
        .collect()
}
