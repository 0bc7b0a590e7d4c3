//! Explicit theme values passed into the renderer per draw call.
//!
//! There is no process-wide theme singleton: the engine owns one `Theme`,
//! and hosts that want change notification register subscribers on a
//! caller-owned [`ThemeStore`].

use crate::render::Color;

/// Color set consumed by chart and selector rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Chart band and selector track background.
    pub background: Color,
    /// Dimmed selector areas outside the window.
    pub dim: Color,
    /// Grid line color.
    pub grid: Color,
    /// Axis and grid value label color.
    pub label: Color,
    /// Selector handle and border color.
    pub control: Color,
    /// Arrow glyph color on the selector handles.
    pub control_arrow: Color,
}

const fn channel(byte: u8) -> f64 {
    byte as f64 / 255.0
}

const fn hex(value: u32) -> Color {
    Color::rgb(
        channel((value >> 16) as u8),
        channel((value >> 8) as u8),
        channel(value as u8),
    )
}

impl Theme {
    #[must_use]
    pub const fn day() -> Self {
        Self {
            background: hex(0xFEFEFE),
            dim: Color::rgba(0.0, 0.0, 0.0, 0.25),
            grid: hex(0xEFEFF4),
            label: hex(0x68686D),
            control: hex(0xCAD4DE),
            control_arrow: hex(0x6F6E6E),
        }
    }

    #[must_use]
    pub const fn night() -> Self {
        Self {
            background: hex(0x222F3F),
            dim: Color::rgba(0.0, 0.0, 0.0, 0.25),
            grid: hex(0x18222D),
            label: hex(0x5B6B80),
            control: hex(0x354659),
            control_arrow: hex(0xFFFFFF),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::day()
    }
}

/// Subscriber notified synchronously when the active theme changes.
pub trait ThemeObserver {
    fn theme_changed(&mut self, theme: Theme);
}

/// Caller-owned theme holder with explicit change notification.
///
/// Created once at application start; read per draw call; mutated only
/// through [`ThemeStore::set`], which raises the change event before
/// returning.
pub struct ThemeStore {
    theme: Theme,
    observers: Vec<Box<dyn ThemeObserver>>,
}

impl ThemeStore {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn subscribe(&mut self, observer: Box<dyn ThemeObserver>) {
        self.observers.push(observer);
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        for observer in &mut self.observers {
            observer.theme_changed(theme);
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("observers", &self.observers.len())
            .finish()
    }
}
