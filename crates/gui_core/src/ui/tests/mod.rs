//! Scenario tests for the element tree
//!
//! Shared widgets record what they saw into a log so tests can check
//! traversal order across elements.

mod hierarchy;

use crate::events::{GuiEvent, Propagation};
use crate::foundation::math::{Color, Vector2i};
use crate::render::ResourceLocation;
use crate::ui::{DrawContext, Drawable, Eventable, GuiContext, Tickable};
use std::cell::RefCell;
use std::rc::Rc;

pub(super) type Log = Rc<RefCell<Vec<String>>>;

pub(super) fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub(super) fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

/// Records every hook call as `"<name>:<what>"`
#[derive(Debug)]
pub(super) struct Recorder {
    pub name: &'static str,
    pub log: Log,
    pub stop_on: Option<&'static str>,
    pub take_focus_on_click: bool,
    pub texture: Option<ResourceLocation>,
}

impl Recorder {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            stop_on: None,
            take_focus_on_click: false,
            texture: None,
        }
    }

    pub fn stopping_on(mut self, event_name: &'static str) -> Self {
        self.stop_on = Some(event_name);
        self
    }

    pub fn focusing(mut self) -> Self {
        self.take_focus_on_click = true;
        self
    }

    pub fn textured(mut self, texture: ResourceLocation) -> Self {
        self.texture = Some(texture);
        self
    }

    fn record(&self, what: impl std::fmt::Display) {
        self.log.borrow_mut().push(format!("{}:{}", self.name, what));
    }
}

impl Eventable for Recorder {
    fn handle_event(&mut self, event: &GuiEvent, ctx: &mut GuiContext<'_>) -> Propagation {
        match event {
            GuiEvent::FocusLost { origin } if *origin == ctx.id() => self.record("focus_lost"),
            _ => self.record(event.name()),
        }

        if self.take_focus_on_click && event.is_for(ctx.id()) && matches!(event, GuiEvent::MouseClicked { .. }) {
            ctx.take_focus();
        }

        if self.stop_on == Some(event.name()) {
            Propagation::Stop
        } else {
            Propagation::Continue
        }
    }
}

impl Tickable for Recorder {
    fn gui_tick(&mut self, _ctx: &mut GuiContext<'_>) {
        self.record("tick");
    }
}

impl Drawable for Recorder {
    fn draw_background(&self, ctx: &mut DrawContext<'_>) {
        self.record("background");
        if let Some(texture) = &self.texture {
            ctx.bind_texture(texture);
        }
    }

    fn draw_foreground(&self, ctx: &mut DrawContext<'_>) {
        self.record("foreground");
        let (position, size) = (ctx.position(), ctx.size());
        ctx.fill_rect(position, size, Color::new(1.0, 1.0, 1.0, 1.0));
    }

    fn draw_overlay(&self, _ctx: &mut DrawContext<'_>) {
        self.record("overlay");
    }
}

pub(super) fn square(side: i32) -> Vector2i {
    Vector2i::new(side, side)
}
