// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Pushing a frame to the window failed
    AssetLoad(String),    // Reading/decoding the hidden picture failed
    RenderThread(String), // Spawning the render thread failed
    /// The picture does not fit inside the viewport, so it cannot be placed.
    ViewportTooSmall {
        viewport: (i32, i32),
        image: (i32, i32),
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::AssetLoad(s) => write!(f, "Asset load error: {s}"),
            Error::RenderThread(s) => write!(f, "Render thread error: {s}"),
            Error::ViewportTooSmall { viewport, image } => write!(
                f,
                "Viewport {}x{} is smaller than the {}x{} picture",
                viewport.0, viewport.1, image.0, image.1
            ),
        }
    }
}
