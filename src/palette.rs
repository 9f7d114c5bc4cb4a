//! Fixed display constants shared by the text and raster renderers.

/// Cell value to xterm-256 color code, one entry per supported value 0-9.
pub const COLORMAP: [u8; 10] = [0, 4, 1, 2, 3, 8, 5, 166, 6, 52];

/// The same ten xterm codes resolved to RGB, in the same value order.
/// Used as the colormap for raster figures.
pub const COLORMAP_RGB: [[u8; 3]; 10] = [
    [0, 0, 0],       // 0 -> black
    [0, 0, 128],     // 4 -> navy
    [128, 0, 0],     // 1 -> maroon
    [0, 128, 0],     // 2 -> green
    [128, 128, 0],   // 3 -> olive
    [128, 128, 128], // 8 -> grey
    [128, 0, 128],   // 5 -> purple
    [215, 95, 0],    // 166 -> orange
    [0, 128, 128],   // 6 -> teal
    [95, 0, 0],      // 52 -> dark red
];

/// Foreground used for every colored cell (xterm bright white).
pub const CELL_FG: u8 = 15;

/// Padding on each side of a cell value.
pub const CELL_PADDING: &str = " ";

/// Horizontal gap between the input and output blocks of a pair.
pub const BOARD_GAP: &str = "     ";

/// Vertical gap between displayed pairs: a blank line carrying one space.
pub const PAIR_GAP: &str = "\n \n";
