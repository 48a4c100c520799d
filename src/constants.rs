pub const WINDOW_TITLE: &str = "Flashlight — find the hidden picture";
pub const VIEWPORT_WIDTH: usize = 900;        // Initial window width (landscape)
pub const VIEWPORT_HEIGHT: usize = 600;       // Initial window height
pub const TARGET_FPS: usize = 60;             // Host presents at most this many frames per second

pub const BACKGROUND_COLOR: u32 = 0x00_FF_FF_FF; // White, shows inside the cone
pub const MASK_COLOR: u32 = 0x00_00_00_00;       // Black, everything outside the cone
pub const PAINT_COLOR: u32 = 0x00_44_44_44;      // Dark gray, used for the win text

pub const WIN_TEXT: &str = "WIN!";
pub const TEXT_SIZE_DIVISOR: i32 = 5;         // Text height = viewport height / 5

pub const ASSET_PATH: &str = "assets/android.png";
pub const FALLBACK_SPRITE_WIDTH: u32 = 100;   // Size of the built-in picture
pub const FALLBACK_SPRITE_HEIGHT: u32 = 80;
