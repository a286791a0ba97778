//! # GUI Core
//!
//! A retained-mode GUI scene graph layered on a host engine's input, tick and
//! render callbacks.
//!
//! ## Features
//!
//! - **Element Tree**: Arena-backed hierarchy with local coordinate frames
//! - **Event Dispatch**: Pre-order delivery that any handler can halt
//! - **Focus**: Single focus slot with a guaranteed focus lost notification
//! - **Draw Pipeline**: Background, foreground and overlay passes over a native transform stack
//! - **Transformations**: Scale, translation, rotation and their composition
//!
//! ## Quick Start
//!
//! ```rust
//! use gui_core::prelude::*;
//!
//! let mut tree = GuiTree::new(Side::Client, GuiControl, Vector2i::new(100, 100));
//! let panel = tree
//!     .insert(tree.root(), ControlPanel::default(), Vector2i::new(10, 10), Vector2i::new(40, 40))
//!     .unwrap();
//!
//! tree.mouse_clicked(Vector2i::new(20, 20), MouseButton::Left);
//! tree.gui_tick();
//!
//! let mut backend = RecordingBackend::new();
//! tree.draw_frame(&mut backend).unwrap();
//! assert_eq!(tree.element_at(Vector2i::new(20, 20)), panel);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod controls;
pub mod events;
pub mod foundation;
pub mod render;
pub mod transform;
pub mod ui;

pub use foundation::collections::ElementId;
pub use ui::{GuiError, GuiTree, Side};

/// Common imports for GUI users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, GuiConfig},
        controls::{ButtonState, ControlButton, ControlPanel, ControlSlot, GuiControl, ItemStack, SlotBinding},
        events::{GuiEvent, KeyModifiers, MouseButton, Propagation},
        foundation::{
            collections::ElementId,
            math::{Color, Matrix4d, Vector2i, Vector3d},
        },
        render::{DrawCommand, GuiRenderBackend, MatrixStack, RecordingBackend, RenderStack, RenderStage, ResourceLocation},
        transform::{Rotation, Scale, Transformation, TransformationList, Translation},
        ui::{DrawContext, Drawable, Eventable, GuiContext, GuiError, GuiTree, Side, Tickable, Widget},
    };
}
