#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod device;
pub mod glow_backend;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod shape;

pub use app::PaintApp;
pub use brush::{BrushConfig, BrushShape};
pub use device::{DeviceError, RenderingDevice, Topology};
pub use history::{ActionAvailability, CanvasHistory, RenderBatch};
pub use session::DrawingSession;
pub use shape::{Shape, ShapeRef};
