//! # lutcam-presets
//!
//! Preset selection, persistence, and reload coordination for the lutcam
//! grading pipeline.
//!
//! A preset is a named, selectable LUT source: one of the bundled looks or
//! a user-imported `.cube` file. This crate owns the single source of truth
//! for which look is active and how strongly it is blended:
//!
//! - [`PresetId`] / [`BuiltinLook`] - The tagged selection model
//! - [`LookLibrary`] - Maps bundled looks to their `.cube` resources
//! - [`LookSettings`] / [`SettingsStore`] - Persisted selection + intensity
//!   behind an injected storage port
//! - [`PresetManager`] - The single-writer state holder: select, import,
//!   reload (latest-wins), query, process
//!
//! # Usage
//!
//! ```rust,ignore
//! use lutcam_presets::{LookLibrary, MemorySettingsStore, PresetId, PresetManager};
//! use lutcam_core::ColorSpace;
//!
//! let library = LookLibrary::new("looks");
//! let manager = PresetManager::new(
//!     library,
//!     Box::new(MemorySettingsStore::default()),
//!     ColorSpace::Srgb,
//! );
//!
//! manager.select_preset(PresetId::Builtin(lutcam_presets::BuiltinLook::Vivid));
//! let graded = manager.process(&frame);
//! ```
//!
//! # Failure Policy
//!
//! Every reload failure is recovered locally: the failure is logged and the
//! active transform is cleared, so the affected preset behaves exactly as
//! if no preset were selected. A stale reload superseded by a newer
//! selection is discarded, never installed.
//!
//! # Dependencies
//!
//! - [`lutcam-lut`] - Cube parsing and transform construction
//! - [`lutcam-ops`] - Intensity blending for [`PresetManager::process`]
//! - [`serde`] / [`serde_yaml`] - Settings persistence
//! - [`tracing`] - Failure diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod manager;
mod preset;
mod settings;
mod store;

pub use error::PresetError;
pub use manager::{PresetManager, ReloadTicket};
pub use preset::{BuiltinLook, LookLibrary, PresetId};
pub use settings::LookSettings;
pub use store::{MemorySettingsStore, SettingsStore, StoreError, YamlSettingsStore};
