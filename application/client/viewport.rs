//! Mobile keyboard workaround: some mobile browsers resize the viewport when
//! the virtual keyboard opens, collapsing the layout under the focused input.
//! While an input has focus, two root style properties are pinned; on blur
//! the pre-focus values are restored exactly.

/// Mutable style surface the workaround pins. The host environment maps this
/// onto the real document root.
pub trait StyleSurface {
    fn get(&self, property: &str) -> Option<String>;
    fn set(&mut self, property: &str, value: &str);
    fn remove(&mut self, property: &str);
}

impl<T: StyleSurface> StyleSurface for &mut T {
    fn get(&self, property: &str) -> Option<String> {
        (**self).get(property)
    }

    fn set(&mut self, property: &str, value: &str) {
        (**self).set(property, value)
    }

    fn remove(&mut self, property: &str) {
        (**self).remove(property)
    }
}

/// The two properties pinned while an input has focus.
const PINNED: [(&str, &str); 2] = [("height", "100%"), ("overflow", "hidden")];

/// The focus/blur listener pair. Dropping it deregisters: any still-pinned
/// styles are restored from the snapshot.
pub struct KeyboardWorkaround<S: StyleSurface> {
    surface: S,
    snapshot: Option<[Option<String>; 2]>,
}

impl<S: StyleSurface> KeyboardWorkaround<S> {
    pub fn register(surface: S) -> Self {
        Self {
            surface,
            snapshot: None,
        }
    }

    /// Focus transition. The snapshot is taken once; nested focus events
    /// while already pinned keep the original values.
    pub fn on_focus(&mut self) {
        if self.snapshot.is_some() {
            return;
        }

        let snapshot = PINNED.map(|(property, _)| self.surface.get(property));
        for (property, value) in PINNED {
            self.surface.set(property, value);
        }
        self.snapshot = Some(snapshot);
    }

    /// Blur transition: restore the snapshot exactly, clearing properties
    /// that were unset before focus.
    pub fn on_blur(&mut self) {
        let Some(snapshot) = self.snapshot.take() else {
            return;
        };

        for ((property, _), previous) in PINNED.iter().zip(snapshot) {
            match previous {
                Some(value) => self.surface.set(property, &value),
                None => self.surface.remove(property),
            }
        }
    }
}

impl<S: StyleSurface> Drop for KeyboardWorkaround<S> {
    fn drop(&mut self) {
        self.on_blur();
    }
}
