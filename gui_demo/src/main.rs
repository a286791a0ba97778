//! Headless inventory screen
//!
//! Builds a small inventory GUI, replays a scripted input session against it
//! and draws frames into a recording backend. Pass a TOML or RON config path
//! as the first argument to override the defaults.

use gui_core::foundation::logging;
use gui_core::prelude::*;
use thiserror::Error;

const SLOT_COUNT: usize = 9;
const SLOT_SIZE: i32 = 18;
/// Top-left corner of the slot row inside the panel
const SLOT_ROW: (i32, i32) = (8, 84);
/// Sort button position and size inside the panel
const SORT_BUTTON: ((i32, i32), (i32, i32)) = ((120, 8), (48, 16));
const KEY_ESCAPE: u32 = 1;

#[derive(Debug, Error)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("GUI error: {0}")]
    Gui(#[from] GuiError),
}

/// Root widget of the screen
#[derive(Debug, Default)]
struct InventoryScreen {
    sort_button: Option<ElementId>,
    sort_requests: u32,
    close_requested: bool,
}

impl Eventable for InventoryScreen {
    fn handle_event(&mut self, event: &GuiEvent, _ctx: &mut GuiContext<'_>) -> Propagation {
        match event {
            GuiEvent::Activated { origin } if Some(*origin) == self.sort_button => {
                self.sort_requests += 1;
                log::info!("Sort requested");
            }
            GuiEvent::KeyTyped { key_code, .. } if *key_code == KEY_ESCAPE => {
                self.close_requested = true;
                log::info!("Close requested");
                // Nothing below the screen needs to see the escape key
                return Propagation::Stop;
            }
            _ => {}
        }
        Propagation::Continue
    }
}

impl Tickable for InventoryScreen {}
impl Drawable for InventoryScreen {}

/// One host callback in the scripted session
#[derive(Debug, Clone, Copy)]
enum Step {
    Move(Vector2i),
    Click(Vector2i, MouseButton),
    Release(Vector2i, MouseButton),
    Key(Option<char>, u32),
    Tick,
    Draw,
}

struct Screen {
    tree: GuiTree,
    slots: Vec<ElementId>,
}

fn build_screen(config: &GuiConfig) -> Result<Screen, DemoError> {
    let mut tree = GuiTree::from_config(config, InventoryScreen::default());
    let root = tree.root();

    let panel = tree.insert(
        root,
        ControlPanel::new(Color::new(0.78, 0.78, 0.78, 1.0)).with_border(Color::new(0.1, 0.1, 0.1, 1.0), 2),
        Vector2i::zeros(),
        config.root_size,
    )?;

    let texture = ResourceLocation::new("gui", "textures/container/inventory.png");
    let mut slots = Vec::with_capacity(SLOT_COUNT);
    for index in 0..SLOT_COUNT {
        // Every other slot starts out holding something
        let item = (index % 2 == 0).then(|| ItemStack {
            item_id: format!("item_{}", index),
            count: 1 + index as u32,
        });
        let slot = ControlSlot::new(Some(SlotBinding { index, item }), texture.clone(), Vector2i::new(7, 83));
        let position = Vector2i::new(SLOT_ROW.0 + SLOT_SIZE * index as i32, SLOT_ROW.1);
        slots.push(tree.insert(panel, slot, position, Vector2i::repeat(SLOT_SIZE))?);
    }

    let ((x, y), (width, height)) = SORT_BUTTON;
    let sort_button = tree.insert(panel, ControlButton::new(), Vector2i::new(x, y), Vector2i::new(width, height))?;
    if let Some(screen) = tree.widget_mut::<InventoryScreen>(root) {
        screen.sort_button = Some(sort_button);
    }

    log::info!("Built inventory screen with {} elements", tree.len());
    Ok(Screen { tree, slots })
}

fn script(origin: Vector2i) -> Vec<Step> {
    let at = |x: i32, y: i32| origin + Vector2i::new(x, y);
    let slot_center = |index: i32| at(SLOT_ROW.0 + SLOT_SIZE * index + SLOT_SIZE / 2, SLOT_ROW.1 + SLOT_SIZE / 2);
    let ((x, y), (width, height)) = SORT_BUTTON;
    let button_center = at(x + width / 2, y + height / 2);

    vec![
        Step::Move(slot_center(0)),
        Step::Draw,
        Step::Click(slot_center(0), MouseButton::Left),
        Step::Release(slot_center(0), MouseButton::Left),
        Step::Tick,
        Step::Move(slot_center(3)),
        Step::Click(slot_center(3), MouseButton::Right),
        Step::Key(Some('q'), 16),
        Step::Draw,
        Step::Move(button_center),
        Step::Click(button_center, MouseButton::Left),
        Step::Release(button_center, MouseButton::Left),
        Step::Tick,
        Step::Draw,
        Step::Key(None, KEY_ESCAPE),
    ]
}

fn run_step(tree: &mut GuiTree, backend: &mut RecordingBackend, step: Step) -> Result<(), DemoError> {
    log::debug!("Step {:?}", step);
    match step {
        Step::Move(position) => {
            tree.mouse_moved(position);
        }
        Step::Click(position, button) => {
            tree.mouse_clicked(position, button);
        }
        Step::Release(position, button) => {
            tree.mouse_released(position, button);
        }
        Step::Key(character, key_code) => {
            tree.key_typed(character, key_code, KeyModifiers::empty());
        }
        Step::Tick => tree.gui_tick(),
        Step::Draw => {
            if !tree.side().is_client() {
                log::info!("Server side tree, skipping draw");
                return Ok(());
            }
            tree.draw_frame(backend)?;
            let commands = backend.take_commands();
            let textured = commands
                .iter()
                .filter(|command| matches!(command, DrawCommand::TexturedRect { .. }))
                .count();
            log::info!(
                "Frame {}: {} draw commands ({} textured), focus on {:?}",
                backend.frames(),
                commands.len(),
                textured,
                tree.focused()
            );
        }
    }
    Ok(())
}

/// Move every item to the front of the row, keeping their order
fn sort_slots(tree: &mut GuiTree, slots: &[ElementId]) {
    let mut items: Vec<ItemStack> = slots
        .iter()
        .filter_map(|&id| tree.widget::<ControlSlot>(id))
        .filter_map(|slot| slot.binding().and_then(|binding| binding.item.clone()))
        .collect();
    items.reverse();

    for (index, &id) in slots.iter().enumerate() {
        let item = items.pop();
        if let Some(slot) = tree.widget_mut::<ControlSlot>(id) {
            slot.set_binding(Some(SlotBinding { index, item }));
        }
    }
}

fn main() -> Result<(), DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => GuiConfig::load_from_file(&path)?,
        None => GuiConfig::default(),
    };
    logging::init_with_filter(&config.log_filter);
    log::info!("Starting GUI demo on the {:?} side", config.side);

    let Screen { mut tree, slots } = build_screen(&config)?;
    let mut backend = RecordingBackend::new();

    for step in script(config.root_position) {
        run_step(&mut tree, &mut backend, step)?;
    }

    let root = tree.root();
    let (sort_requests, close_requested) = tree
        .widget::<InventoryScreen>(root)
        .map_or((0, false), |screen| (screen.sort_requests, screen.close_requested));

    if sort_requests > 0 {
        sort_slots(&mut tree, &slots);
        let occupied: Vec<usize> = slots
            .iter()
            .filter_map(|&id| tree.widget::<ControlSlot>(id))
            .filter_map(|slot| slot.binding())
            .filter(|binding| binding.item.is_some())
            .map(|binding| binding.index)
            .collect();
        log::info!("Sorted inventory, occupied slots: {:?}", occupied);
    }

    log::info!(
        "Session finished after {} frames (close requested: {})",
        backend.frames(),
        close_requested
    );
    Ok(())
}
