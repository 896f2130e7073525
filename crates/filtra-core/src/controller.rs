//! Window controller: binds sessions to display surfaces and routes every
//! inbound UI event to exactly one session handler.

use std::collections::BTreeMap;

use crate::buffer::ImageBuffer;
use crate::config::UiDefaults;
use crate::effects::EffectKind;
use crate::session::{FilterKind, WindowSession};
use crate::verbose_println;

/// Display surface collaborator, keyed by window name.
///
/// The controller never creates or destroys windows itself; it asks the
/// surface to show a frame under a name or to drop a named window.
pub trait DisplaySurface {
    /// Show `frame` in the window called `name`, creating it if needed.
    fn present(&mut self, name: &str, frame: &ImageBuffer);
    /// Drop the window called `name`, if it exists.
    fn release(&mut self, name: &str);
}

/// Output window name for an effect, derived from the session name.
pub fn effect_window_name(session: &str, kind: EffectKind) -> String {
    format!("{} {}", session, kind.window_suffix())
}

/// Owns every open window session and the surface they render to.
///
/// Events are delivered one at a time on a single thread; each handler
/// runs to completion, including its render, before the next event is
/// processed. Sessions never share state with each other.
pub struct WindowController<S: DisplaySurface> {
    surface: S,
    sessions: BTreeMap<String, WindowSession>,
}

impl<S: DisplaySurface> WindowController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            sessions: BTreeMap::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn session(&self, name: &str) -> Option<&WindowSession> {
        self.sessions.get(name)
    }

    pub fn session_names(&self) -> Vec<String> {
        self.sessions.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Open a session for an already-decoded image and present its base
    /// frame. Per-session setup happens here, once, at creation time.
    pub fn open(
        &mut self,
        name: &str,
        image: ImageBuffer,
        defaults: UiDefaults,
    ) -> Result<(), String> {
        if self.sessions.contains_key(name) {
            return Err(format!("Window {:?} is already open", name));
        }
        verbose_println!(
            "[filtra] opening {:?} ({}x{}, {} channels)",
            name,
            image.width(),
            image.height(),
            image.channels()
        );
        let session = WindowSession::new(name, image, defaults);
        self.surface.present(name, session.base());
        self.sessions.insert(name.to_string(), session);
        Ok(())
    }

    /// Close a session, dropping its state and releasing its window along
    /// with any effect output windows derived from it.
    pub fn close(&mut self, name: &str) -> Result<(), String> {
        self.sessions
            .remove(name)
            .ok_or_else(|| format!("No open window named {:?}", name))?;
        self.surface.release(name);
        for kind in EffectKind::ALL {
            self.surface.release(&effect_window_name(name, kind));
        }
        Ok(())
    }

    /// Route a slider move. A non-positive position presents nothing.
    pub fn slider_changed(&mut self, name: &str, pos: i32) -> Result<(), String> {
        let frame = self.session_mut(name)?.on_slide(pos);
        if let Some(frame) = frame {
            self.surface.present(name, &frame);
        }
        Ok(())
    }

    /// Route a pointer press in image coordinates.
    pub fn pointer_pressed(&mut self, name: &str, x: i32, y: i32) -> Result<(), String> {
        let frame = self.session_mut(name)?.on_pointer_down(x, y);
        self.surface.present(name, &frame);
        Ok(())
    }

    /// Route a filter toggle button press.
    pub fn filter_toggled(&mut self, name: &str, kind: FilterKind) -> Result<(), String> {
        let frame = self.session_mut(name)?.toggle_filter(kind);
        self.surface.present(name, &frame);
        Ok(())
    }

    /// Route an effect button press. The output goes to a derived window,
    /// never to the session's main frame.
    pub fn effect_requested(&mut self, name: &str, kind: EffectKind) -> Result<(), String> {
        let frame = self.session_mut(name)?.run_effect(kind);
        self.surface.present(&effect_window_name(name, kind), &frame);
        Ok(())
    }

    fn session_mut(&mut self, name: &str) -> Result<&mut WindowSession, String> {
        self.sessions
            .get_mut(name)
            .ok_or_else(|| format!("No open window named {:?}", name))
    }
}
