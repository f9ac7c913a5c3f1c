//! SSD1306 command definitions.

// Fundamental
pub const DISPLAY_OFF: u8 = 0xAE; // Sleep mode
pub const DISPLAY_ON: u8 = 0xAF; // Wake from sleep
pub const CONTRAST: u8 = 0x81; // Followed by one byte, 0-255
pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4; // Output follows RAM content
pub const ENTIRE_DISPLAY_ON: u8 = 0xA5; // All pixels lit regardless of RAM
pub const DISPLAY_NORMAL: u8 = 0xA6; // RAM 1 = lit pixel
pub const DISPLAY_INVERSE: u8 = 0xA7; // RAM 0 = lit pixel

// Addressing
pub const MEMORY_ADDRESSING_MODE: u8 = 0x20; // Followed by 0x00 horizontal
pub const SET_COLUMN_ADDRESS: u8 = 0x21; // Followed by start, end column
pub const SET_PAGE_ADDRESS: u8 = 0x22; // Followed by start, end page

// Hardware configuration
pub const SET_START_LINE: u8 = 0x40; // OR low 6 bits with the line
pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0; // Column 0 -> SEG0
pub const SEGMENT_REMAP_REVERSED: u8 = 0xA1; // Column 127 -> SEG0
pub const MUX_RATIO: u8 = 0xA8; // Followed by height - 1
pub const COM_SCAN_NORMAL: u8 = 0xC0; // Scan COM0 -> COM[N-1]
pub const COM_SCAN_REVERSED: u8 = 0xC8; // Scan COM[N-1] -> COM0
pub const DISPLAY_OFFSET: u8 = 0xD3; // Followed by vertical shift
pub const COM_PINS_CONFIGURATION: u8 = 0xDA; // Followed by pin layout byte

// Timing and driving
pub const SET_CLOCK_DIV: u8 = 0xD5; // Followed by divide ratio/frequency
pub const SET_PRE_CHARGE: u8 = 0xD9; // Followed by pre-charge period
pub const CHARGE_PUMP: u8 = 0x8D; // Followed by 0x14 to enable

// Scrolling
pub const DEACTIVATE_SCROLL: u8 = 0x2E;
