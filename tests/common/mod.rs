#![allow(dead_code)]

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use sundaw_site::core::{
    Banner, BannerSurface, FormFields, FormView, Scheduler, Sleeper, SubmissionTransport,
};
use sundaw_site::domain::model::BannerId;
use sundaw_site::{BannerController, SiteError, SubmissionRecord};

pub fn valid_fields() -> FormFields {
    FormFields::new("Jo", "jo@x.co", "1234567890", "Lawn mowing weekly")
}

struct PendingTask {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct SchedulerState {
    now: Duration,
    seq: u64,
    tasks: Vec<PendingTask>,
}

/// Timer queue driven by hand from the test.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Runs every task that falls due within `by`, including ones scheduled
    /// by tasks run along the way.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let index = state
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                index.map(|i| {
                    let task = state.tasks.remove(i);
                    state.now = task.due;
                    task
                })
            };
            match next {
                Some(task) => (task.task)(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        let seq = state.seq;
        state.seq += 1;
        state.tasks.push(PendingTask { due, seq, task });
    }
}

/// Keeps what a real page would be showing.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub visible: Rc<RefCell<Vec<Banner>>>,
    pub mounted: Rc<RefCell<Vec<Banner>>>,
    pub faded: Rc<RefCell<Vec<(BannerId, Duration)>>>,
}

impl RecordingSurface {
    pub fn visible_texts(&self) -> Vec<String> {
        self.visible.borrow().iter().map(|b| b.text.clone()).collect()
    }

    pub fn last_mounted(&self) -> Option<Banner> {
        self.mounted.borrow().last().cloned()
    }
}

impl BannerSurface for RecordingSurface {
    fn mount(&self, banner: &Banner) {
        let mut visible = self.visible.borrow_mut();
        visible.clear();
        visible.push(banner.clone());
        self.mounted.borrow_mut().push(banner.clone());
    }

    fn fade(&self, id: BannerId, duration: Duration) {
        self.faded.borrow_mut().push((id, duration));
    }

    fn remove(&self, id: BannerId) {
        self.visible.borrow_mut().retain(|b| b.id != id);
    }
}

pub fn banners(surface: &RecordingSurface, scheduler: &ManualScheduler) -> BannerController {
    BannerController::new(
        Rc::new(surface.clone()),
        Rc::new(scheduler.clone()),
        Duration::from_millis(6000),
        Duration::from_millis(500),
    )
}

#[derive(Default)]
pub struct FormState {
    pub fields: RefCell<FormFields>,
    pub label: RefCell<String>,
    pub disabled: Cell<bool>,
    pub resets: Cell<usize>,
    pub states: RefCell<Vec<(String, bool)>>,
}

#[derive(Clone)]
pub struct FakeFormView {
    pub state: Rc<FormState>,
}

impl FakeFormView {
    pub fn with_fields(fields: FormFields) -> Self {
        let state = FormState {
            fields: RefCell::new(fields),
            label: RefCell::new("Request Service".to_string()),
            ..FormState::default()
        };
        Self {
            state: Rc::new(state),
        }
    }

    pub fn fields(&self) -> FormFields {
        self.state.fields.borrow().clone()
    }

    pub fn label(&self) -> String {
        self.state.label.borrow().clone()
    }
}

impl FormView for FakeFormView {
    fn read_fields(&self) -> FormFields {
        self.state.fields.borrow().clone()
    }

    fn submit_label(&self) -> String {
        self.state.label.borrow().clone()
    }

    fn set_submit_state(&self, label: &str, disabled: bool) {
        *self.state.label.borrow_mut() = label.to_string();
        self.state.disabled.set(disabled);
        self.state
            .states
            .borrow_mut()
            .push((label.to_string(), disabled));
    }

    fn reset(&self) {
        *self.state.fields.borrow_mut() = FormFields::default();
        self.state.resets.set(self.state.resets.get() + 1);
    }
}

/// Returns at once, remembering what it was asked to wait.
#[derive(Clone, Default)]
pub struct InstantSleeper {
    pub waits: Rc<RefCell<Vec<Duration>>>,
}

#[async_trait(?Send)]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, duration: Duration) {
        self.waits.borrow_mut().push(duration);
    }
}

pub struct FailingTransport;

#[async_trait(?Send)]
impl SubmissionTransport for FailingTransport {
    async fn deliver(&self, _record: &SubmissionRecord) -> sundaw_site::Result<()> {
        Err(SiteError::transport("connection refused"))
    }
}
