use crate::domain::model::{Banner, BannerId, BannerKind};
use crate::domain::ports::{BannerSurface, Scheduler};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Shows one banner at a time and retires it after a fixed display period.
///
/// Each banner gets a fresh id. Dismissal timers carry the id they were
/// armed for, so a late timer never touches a banner that replaced it.
#[derive(Clone)]
pub struct BannerController {
    surface: Rc<dyn BannerSurface>,
    scheduler: Rc<dyn Scheduler>,
    display: Duration,
    fade: Duration,
    next_id: Rc<Cell<BannerId>>,
    current: Rc<Cell<Option<BannerId>>>,
}

impl BannerController {
    pub fn new(
        surface: Rc<dyn BannerSurface>,
        scheduler: Rc<dyn Scheduler>,
        display: Duration,
        fade: Duration,
    ) -> Self {
        Self {
            surface,
            scheduler,
            display,
            fade,
            next_id: Rc::new(Cell::new(1)),
            current: Rc::new(Cell::new(None)),
        }
    }

    pub fn show(&self, kind: BannerKind, text: impl Into<String>) -> BannerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let banner = Banner {
            id,
            kind,
            text: text.into(),
        };
        self.surface.mount(&banner);
        self.current.set(Some(id));
        tracing::debug!(id, kind = %kind, "banner shown");

        let surface = Rc::clone(&self.surface);
        let scheduler = Rc::clone(&self.scheduler);
        let current = Rc::clone(&self.current);
        let fade = self.fade;
        self.scheduler.schedule(
            self.display,
            Box::new(move || {
                surface.fade(id, fade);
                scheduler.schedule(
                    fade,
                    Box::new(move || {
                        surface.remove(id);
                        if current.get() == Some(id) {
                            current.set(None);
                        }
                    }),
                );
            }),
        );

        id
    }

    pub fn success(&self, text: impl Into<String>) -> BannerId {
        self.show(BannerKind::Success, text)
    }

    pub fn error(&self, text: impl Into<String>) -> BannerId {
        self.show(BannerKind::Error, text)
    }

    /// The banner currently on screen, if its dismissal has not run yet.
    pub fn current(&self) -> Option<BannerId> {
        self.current.get()
    }
}

impl std::fmt::Debug for BannerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BannerController")
            .field("display", &self.display)
            .field("fade", &self.fade)
            .field("current", &self.current.get())
            .finish()
    }
}
